use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(uuid(Reservation::Id).primary_key())
                    .col(uuid(Reservation::UserId))
                    .col(uuid(Reservation::RestaurantId))
                    .col(uuid(Reservation::TableId))
                    .col(timestamp_with_time_zone(Reservation::ReservationDate))
                    .col(string_len(Reservation::ReservationTime, 5))
                    .col(integer(Reservation::GuestCount).check(Expr::col(Reservation::GuestCount).gte(1)))
                    .col(string_len(Reservation::Status, 16).default("PENDING"))
                    .col(string_len_null(Reservation::Notes, 500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_restaurant")
                            .from(Reservation::Table, Reservation::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_table")
                            .from(Reservation::Table, Reservation::TableId)
                            .to(DiningTable::Table, DiningTable::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reservation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reservation { Table, Id, UserId, RestaurantId, TableId, ReservationDate, ReservationTime, GuestCount, Status, Notes }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Restaurant { Table, Id }

#[derive(DeriveIden)]
enum DiningTable { Table, Id }
