use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(uuid(Payment::Id).primary_key())
                    .col(uuid(Payment::ReservationId))
                    .col(uuid(Payment::UserId))
                    .col(decimal_len(Payment::Amount, 12, 2).check(Expr::col(Payment::Amount).gte(0)))
                    .col(string_len(Payment::Currency, 3))
                    .col(string_len(Payment::Method, 16))
                    .col(string_len(Payment::Status, 16))
                    .col(timestamp_with_time_zone(Payment::PaidAt))
                    .col(string_len_null(Payment::Reference, 100))
                    .col(string_len_null(Payment::Notes, 500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_reservation")
                            .from(Payment::Table, Payment::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_user")
                            .from(Payment::Table, Payment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Payment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Payment { Table, Id, ReservationId, UserId, Amount, Currency, Method, Status, PaidAt, Reference, Notes }

#[derive(DeriveIden)]
enum Reservation { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }
