use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionPlan::Table)
                    .if_not_exists()
                    .col(uuid(SubscriptionPlan::Id).primary_key())
                    .col(string_len(SubscriptionPlan::Name, 120))
                    .col(string_len(SubscriptionPlan::Tier, 16))
                    .col(decimal_len(SubscriptionPlan::Price, 12, 2))
                    .col(string_len(SubscriptionPlan::BillingCycle, 16))
                    .col(string_len(SubscriptionPlan::Status, 16))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SubscriptionPlan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SubscriptionPlan { Table, Id, Name, Tier, Price, BillingCycle, Status }
