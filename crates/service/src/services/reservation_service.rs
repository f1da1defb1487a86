//! Reservations book a table for a user at a restaurant.
//!
//! The booked table must sit in a section of the same restaurant. On update a new
//! `tableId` is checked against the effective restaurant; a restaurant change on
//! its own is checked against the table already booked.
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dates::{parse_date, parse_optional, DateInput};
use crate::domain::{DiningTable, Reservation, ReservationStatus, Restaurant, User};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};
use crate::validation::clock_time;

pub const TABLE_RESTAURANT_MISMATCH: &str = "Table does not belong to the specified restaurant.";
pub const RESTAURANT_TABLE_MISMATCH: &str = "The current table does not belong to the updated restaurant.";

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationInput {
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub reservation_date: DateInput,
    /// `HH:mm`
    #[validate(custom(function = clock_time))]
    pub reservation_time: String,
    #[validate(range(min = 1))]
    pub guest_count: i32,
    /// Defaults to `PENDING`.
    pub status: Option<ReservationStatus>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationInput {
    pub user_id: Option<Uuid>,
    pub restaurant_id: Option<Uuid>,
    pub table_id: Option<Uuid>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub reservation_date: Option<DateInput>,
    #[validate(custom(function = clock_time))]
    pub reservation_time: Option<String>,
    #[validate(range(min = 1))]
    pub guest_count: Option<i32>,
    pub status: Option<ReservationStatus>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

pub struct ReservationService {
    reservations: Repo<Reservation>,
    users: Repo<User>,
    restaurants: Repo<Restaurant>,
    tables: Repo<DiningTable>,
}

impl ReservationService {
    pub fn new(
        reservations: Repo<Reservation>,
        users: Repo<User>,
        restaurants: Repo<Restaurant>,
        tables: Repo<DiningTable>,
    ) -> Self {
        Self { reservations, users, restaurants, tables }
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Reservation>, ServiceError> {
        self.reservations.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Reservation, ServiceError> {
        find_required(self.reservations.as_ref(), id).await
    }

    #[instrument(skip_all, fields(restaurant_id = %input.restaurant_id, table_id = %input.table_id))]
    pub async fn create(&self, input: CreateReservationInput) -> Result<Reservation, ServiceError> {
        let user = find_required(self.users.as_ref(), input.user_id).await?;
        let restaurant = find_required(self.restaurants.as_ref(), input.restaurant_id).await?;
        let table = find_required(self.tables.as_ref(), input.table_id).await?;
        ensure_table_in_restaurant(&table, &restaurant, TABLE_RESTAURANT_MISMATCH)?;
        let reservation_date = parse_date(&input.reservation_date, "reservationDate")?;

        let reservation = Reservation {
            id: Uuid::new_v4(),
            user,
            restaurant,
            table,
            reservation_date,
            reservation_time: input.reservation_time,
            guest_count: input.guest_count,
            status: input.status.unwrap_or_default(),
            notes: input.notes,
        };
        let reservation = self.reservations.create(reservation).await?;
        info!(reservation_id = %reservation.id, status = ?reservation.status, "reservation_created");
        Ok(reservation)
    }

    #[instrument(skip(self, input), fields(reservation_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateReservationInput) -> Result<Reservation, ServiceError> {
        let existing = self.get(id).await?;

        let user = match input.user_id {
            Some(uid) => find_required(self.users.as_ref(), uid).await?,
            None => existing.user.clone(),
        };
        let restaurant = match input.restaurant_id {
            Some(rid) => find_required(self.restaurants.as_ref(), rid).await?,
            None => existing.restaurant.clone(),
        };
        let table = match input.table_id {
            Some(tid) => {
                let table = find_required(self.tables.as_ref(), tid).await?;
                ensure_table_in_restaurant(&table, &restaurant, TABLE_RESTAURANT_MISMATCH)?;
                table
            }
            None => {
                if input.restaurant_id.is_some() {
                    ensure_table_in_restaurant(&existing.table, &restaurant, RESTAURANT_TABLE_MISMATCH)?;
                }
                existing.table.clone()
            }
        };
        let reservation_date = parse_optional(input.reservation_date.as_ref(), "reservationDate")?;

        let updated = Reservation {
            user,
            restaurant,
            table,
            reservation_date: reservation_date.unwrap_or(existing.reservation_date),
            reservation_time: input.reservation_time.unwrap_or(existing.reservation_time),
            guest_count: input.guest_count.unwrap_or(existing.guest_count),
            status: input.status.unwrap_or(existing.status),
            notes: input.notes.or(existing.notes),
            ..existing
        };
        let updated = self.reservations.update(updated).await?;
        info!(reservation_id = %updated.id, "reservation_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(reservation_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.reservations.as_ref(), id).await?;
        info!(reservation_id = %id, "reservation_deleted");
        Ok(())
    }
}

fn ensure_table_in_restaurant(table: &DiningTable, restaurant: &Restaurant, message: &str) -> Result<(), ServiceError> {
    if table.restaurant().id != restaurant.id {
        warn!(table_id = %table.id, restaurant_id = %restaurant.id, "reservation_table_restaurant_mismatch");
        return Err(ServiceError::consistency(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn status_defaults_to_pending() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = s.reservations.create(test_support::reservation_input(f.user.id, f.restaurant.id, f.table.id)).await.unwrap();
        assert_eq!(v.status, ReservationStatus::Pending);
        assert_eq!(v.guest_count, 4);
        assert_eq!(s.reservations.get(v.id).await.unwrap(), v);
    }

    #[tokio::test]
    async fn table_from_another_restaurant_is_rejected() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let other = test_support::restaurant(&s, "Otra").await;
        let err = s.reservations
            .create(test_support::reservation_input(f.user.id, other.id, f.table.id))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::invalid(TABLE_RESTAURANT_MISMATCH));
    }

    #[tokio::test]
    async fn restaurant_only_change_checks_current_table() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let other = test_support::restaurant(&s, "Otra").await;
        let v = s.reservations.create(test_support::reservation_input(f.user.id, f.restaurant.id, f.table.id)).await.unwrap();
        let err = s.reservations
            .update(v.id, UpdateReservationInput { restaurant_id: Some(other.id), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::invalid(RESTAURANT_TABLE_MISMATCH));
    }

    #[tokio::test]
    async fn new_table_is_checked_against_effective_restaurant() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let other = test_support::restaurant(&s, "Otra").await;
        let other_section = test_support::section(&s, other.id).await;
        let other_table = test_support::table(&s, other_section.id).await;
        let v = s.reservations.create(test_support::reservation_input(f.user.id, f.restaurant.id, f.table.id)).await.unwrap();

        let err = s.reservations
            .update(v.id, UpdateReservationInput { table_id: Some(other_table.id), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::invalid(TABLE_RESTAURANT_MISMATCH));

        let moved = s.reservations
            .update(
                v.id,
                UpdateReservationInput { restaurant_id: Some(other.id), table_id: Some(other_table.id), ..Default::default() },
            )
            .await
            .unwrap();
        assert_eq!(moved.restaurant.id, other.id);
        assert_eq!(moved.table.id, other_table.id);
    }

    #[tokio::test]
    async fn each_missing_reference_is_not_found() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let missing = Uuid::new_v4();

        let err = s.reservations
            .create(test_support::reservation_input(missing, f.restaurant.id, f.table.id))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("User", missing));
        let err = s.reservations
            .create(test_support::reservation_input(f.user.id, missing, f.table.id))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Restaurant", missing));
        let err = s.reservations
            .create(test_support::reservation_input(f.user.id, f.restaurant.id, missing))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Table", missing));
        assert!(s.reservations.list(Pagination::default()).await.unwrap().is_empty());

        let v = test_support::reservation(&s, &f).await;
        let err = s.reservations
            .update(v.id, UpdateReservationInput { table_id: Some(missing), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Table", missing));
        let err = s.reservations.update(missing, UpdateReservationInput::default()).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Reservation", missing));
    }

    #[tokio::test]
    async fn bad_date_is_invalid_argument() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let mut input = test_support::reservation_input(f.user.id, f.restaurant.id, f.table.id);
        input.reservation_date = "tomorrow".into();
        let err = s.reservations.create(input).await.unwrap_err();
        assert_eq!(err, ServiceError::invalid("Invalid date value for reservationDate."));
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = s.reservations.create(test_support::reservation_input(f.user.id, f.restaurant.id, f.table.id)).await.unwrap();
        assert_eq!(s.reservations.update(v.id, UpdateReservationInput::default()).await.unwrap(), v);
    }

    #[test]
    fn time_and_guests_are_shape_checked() {
        let mut input = test_support::reservation_input(Uuid::nil(), Uuid::nil(), Uuid::nil());
        input.reservation_time = "7pm".into();
        input.guest_count = 0;
        let errs = input.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("reservation_time"));
        assert!(errs.field_errors().contains_key("guest_count"));
    }
}
