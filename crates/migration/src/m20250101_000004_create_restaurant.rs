//! Create `restaurant` table with an optional FK to `image`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(uuid(Restaurant::Id).primary_key())
                    .col(string_len(Restaurant::Name, 150))
                    .col(string_len_null(Restaurant::Description, 500))
                    .col(string_len(Restaurant::Address, 255))
                    .col(string_len_null(Restaurant::OpeningHours, 120))
                    .col(integer(Restaurant::Capacity).check(Expr::col(Restaurant::Capacity).gte(1)))
                    .col(uuid_null(Restaurant::ImageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_image")
                            .from(Restaurant::Table, Restaurant::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurant::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurant { Table, Id, Name, Description, Address, OpeningHours, Capacity, ImageId }

#[derive(DeriveIden)]
enum Image { Table, Id }
