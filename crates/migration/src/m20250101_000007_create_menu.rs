use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(uuid(Menu::Id).primary_key())
                    .col(uuid(Menu::RestaurantId))
                    .col(string_len(Menu::Name, 150))
                    .col(string_len_null(Menu::Description, 500))
                    .col(decimal_len_null(Menu::Price, 12, 2))
                    .col(string_len_null(Menu::CoverImageUrl, 255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_restaurant")
                            .from(Menu::Table, Menu::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Menu::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Menu { Table, Id, RestaurantId, Name, Description, Price, CoverImageUrl }

#[derive(DeriveIden)]
enum Restaurant { Table, Id }
