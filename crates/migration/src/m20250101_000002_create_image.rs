use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(uuid(Image::Id).primary_key())
                    .col(string_len(Image::Url, 255))
                    .col(string_len_null(Image::Title, 100))
                    .col(string_len_null(Image::Description, 255))
                    .col(timestamp_with_time_zone(Image::CreatedAt))
                    .col(boolean(Image::IsActive).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Image::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Image { Table, Id, Url, Title, Description, CreatedAt, IsActive }
