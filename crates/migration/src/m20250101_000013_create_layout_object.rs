//! Create `layout_object` and the `section_layout_object` join table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LayoutObject::Table)
                    .if_not_exists()
                    .col(uuid(LayoutObject::Id).primary_key())
                    .col(string_len_null(LayoutObject::Name, 100))
                    .col(string_len_null(LayoutObject::Type, 50))
                    .col(integer(LayoutObject::PositionX))
                    .col(integer(LayoutObject::PositionY))
                    .col(integer(LayoutObject::Width).check(Expr::col(LayoutObject::Width).gte(1)))
                    .col(integer(LayoutObject::Height).check(Expr::col(LayoutObject::Height).gte(1)))
                    .col(uuid_null(LayoutObject::ImageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_layout_object_image")
                            .from(LayoutObject::Table, LayoutObject::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SectionLayoutObject::Table)
                    .if_not_exists()
                    .col(uuid(SectionLayoutObject::SectionId))
                    .col(uuid(SectionLayoutObject::LayoutObjectId))
                    .primary_key(
                        Index::create()
                            .col(SectionLayoutObject::SectionId)
                            .col(SectionLayoutObject::LayoutObjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_layout_object_section")
                            .from(SectionLayoutObject::Table, SectionLayoutObject::SectionId)
                            .to(Section::Table, Section::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_layout_object_object")
                            .from(SectionLayoutObject::Table, SectionLayoutObject::LayoutObjectId)
                            .to(LayoutObject::Table, LayoutObject::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SectionLayoutObject::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(LayoutObject::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum LayoutObject { Table, Id, Name, Type, PositionX, PositionY, Width, Height, ImageId }

#[derive(DeriveIden)]
enum SectionLayoutObject { Table, SectionId, LayoutObjectId }

#[derive(DeriveIden)]
enum Section { Table, Id }

#[derive(DeriveIden)]
enum Image { Table, Id }
