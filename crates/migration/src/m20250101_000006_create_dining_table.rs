//! Create `dining_table` with FKs to `section` and `image`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiningTable::Table)
                    .if_not_exists()
                    .col(uuid(DiningTable::Id).primary_key())
                    .col(uuid(DiningTable::SectionId))
                    .col(integer(DiningTable::TableNumber))
                    .col(integer(DiningTable::Capacity).check(Expr::col(DiningTable::Capacity).gte(1)))
                    .col(integer(DiningTable::PositionX))
                    .col(integer(DiningTable::PositionY))
                    .col(integer(DiningTable::Width).check(Expr::col(DiningTable::Width).gte(1)))
                    .col(integer(DiningTable::Height).check(Expr::col(DiningTable::Height).gte(1)))
                    .col(uuid_null(DiningTable::ImageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dining_table_section")
                            .from(DiningTable::Table, DiningTable::SectionId)
                            .to(Section::Table, Section::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dining_table_image")
                            .from(DiningTable::Table, DiningTable::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DiningTable::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DiningTable { Table, Id, SectionId, TableNumber, Capacity, PositionX, PositionY, Width, Height, ImageId }

#[derive(DeriveIden)]
enum Section { Table, Id }

#[derive(DeriveIden)]
enum Image { Table, Id }
