use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Section::Table)
                    .if_not_exists()
                    .col(uuid(Section::Id).primary_key())
                    .col(uuid(Section::RestaurantId))
                    .col(string_len(Section::Name, 120))
                    .col(string_len_null(Section::Description, 500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_restaurant")
                            .from(Section::Table, Section::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Section::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Section { Table, Id, RestaurantId, Name, Description }

#[derive(DeriveIden)]
enum Restaurant { Table, Id }
