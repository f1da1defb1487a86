//! Create `dish` with FKs to `restaurant`, `menu` and `image`.
//!
//! The menu/restaurant pairing is enforced by the service layer, not by a constraint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(uuid(Dish::Id).primary_key())
                    .col(uuid(Dish::RestaurantId))
                    .col(uuid(Dish::MenuId))
                    .col(string_len(Dish::Name, 150))
                    .col(string_len_null(Dish::Description, 500))
                    .col(decimal_len(Dish::Price, 12, 2))
                    .col(uuid_null(Dish::ImageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dish_restaurant")
                            .from(Dish::Table, Dish::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dish_menu")
                            .from(Dish::Table, Dish::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dish_image")
                            .from(Dish::Table, Dish::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dish::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dish { Table, Id, RestaurantId, MenuId, Name, Description, Price, ImageId }

#[derive(DeriveIden)]
enum Restaurant { Table, Id }

#[derive(DeriveIden)]
enum Menu { Table, Id }

#[derive(DeriveIden)]
enum Image { Table, Id }
