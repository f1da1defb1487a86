//! Create `subscription`. `ends_on` is nullable; null means open-ended.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(uuid(Subscription::Id).primary_key())
                    .col(uuid(Subscription::UserId))
                    .col(uuid(Subscription::RestaurantId))
                    .col(uuid(Subscription::PlanId))
                    .col(timestamp_with_time_zone(Subscription::StartsOn))
                    .col(timestamp_with_time_zone_null(Subscription::EndsOn))
                    .col(string_len(Subscription::Status, 16).default("ACTIVE"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_user")
                            .from(Subscription::Table, Subscription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_restaurant")
                            .from(Subscription::Table, Subscription::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_plan")
                            .from(Subscription::Table, Subscription::PlanId)
                            .to(SubscriptionPlan::Table, SubscriptionPlan::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Subscription::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Subscription { Table, Id, UserId, RestaurantId, PlanId, StartsOn, EndsOn, Status }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Restaurant { Table, Id }

#[derive(DeriveIden)]
enum SubscriptionPlan { Table, Id }
