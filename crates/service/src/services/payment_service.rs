use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dates::{parse_date, parse_optional, DateInput};
use crate::domain::{Payment, PaymentMethod, PaymentStatus, Reservation, User};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};
use crate::validation::{currency_code, non_negative};

pub const PAYER_MISMATCH: &str = "Payment user must match the reservation user.";

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentInput {
    pub reservation_id: Uuid,
    pub user_id: Uuid,
    #[validate(custom(function = non_negative))]
    pub amount: Decimal,
    #[validate(custom(function = currency_code))]
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub paid_at: DateInput,
    #[validate(length(max = 100))]
    pub reference: Option<String>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentInput {
    pub reservation_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    #[validate(custom(function = non_negative))]
    pub amount: Option<Decimal>,
    #[validate(custom(function = currency_code))]
    pub currency: Option<String>,
    pub method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub paid_at: Option<DateInput>,
    #[validate(length(max = 100))]
    pub reference: Option<String>,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

pub struct PaymentService {
    payments: Repo<Payment>,
    reservations: Repo<Reservation>,
    users: Repo<User>,
}

impl PaymentService {
    pub fn new(payments: Repo<Payment>, reservations: Repo<Reservation>, users: Repo<User>) -> Self {
        Self { payments, reservations, users }
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Payment>, ServiceError> {
        self.payments.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Payment, ServiceError> {
        find_required(self.payments.as_ref(), id).await
    }

    #[instrument(skip_all, fields(reservation_id = %input.reservation_id))]
    pub async fn create(&self, input: CreatePaymentInput) -> Result<Payment, ServiceError> {
        let reservation = find_required(self.reservations.as_ref(), input.reservation_id).await?;
        let user = find_required(self.users.as_ref(), input.user_id).await?;
        ensure_payer(&reservation, &user)?;
        let paid_at = parse_date(&input.paid_at, "paidAt")?;

        let payment = Payment {
            id: Uuid::new_v4(),
            reservation,
            user,
            amount: input.amount,
            currency: input.currency,
            method: input.method,
            status: input.status,
            paid_at,
            reference: input.reference,
            notes: input.notes,
        };
        let payment = self.payments.create(payment).await?;
        info!(payment_id = %payment.id, amount = %payment.amount, currency = %payment.currency, "payment_created");
        Ok(payment)
    }

    /// The payer check runs on every update against the effective pair, even when
    /// neither id changed.
    #[instrument(skip(self, input), fields(payment_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdatePaymentInput) -> Result<Payment, ServiceError> {
        let existing = self.get(id).await?;
        let reservation = match input.reservation_id {
            Some(rid) => find_required(self.reservations.as_ref(), rid).await?,
            None => existing.reservation.clone(),
        };
        let user = match input.user_id {
            Some(uid) => find_required(self.users.as_ref(), uid).await?,
            None => existing.user.clone(),
        };
        ensure_payer(&reservation, &user)?;
        let paid_at = parse_optional(input.paid_at.as_ref(), "paidAt")?;

        let updated = Payment {
            reservation,
            user,
            amount: input.amount.unwrap_or(existing.amount),
            currency: input.currency.unwrap_or(existing.currency),
            method: input.method.unwrap_or(existing.method),
            status: input.status.unwrap_or(existing.status),
            paid_at: paid_at.unwrap_or(existing.paid_at),
            reference: input.reference.or(existing.reference),
            notes: input.notes.or(existing.notes),
            ..existing
        };
        let updated = self.payments.update(updated).await?;
        info!(payment_id = %updated.id, "payment_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(payment_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.payments.as_ref(), id).await?;
        info!(payment_id = %id, "payment_deleted");
        Ok(())
    }
}

fn ensure_payer(reservation: &Reservation, user: &User) -> Result<(), ServiceError> {
    if reservation.user.id != user.id {
        warn!(reservation_id = %reservation.id, user_id = %user.id, "payment_user_mismatch");
        return Err(ServiceError::consistency(PAYER_MISMATCH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn payment_by_the_booking_user_succeeds() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = test_support::reservation(&s, &f).await;
        let p = s.payments.create(test_support::payment_input(v.id, f.user.id)).await.unwrap();
        assert_eq!(p.amount, Decimal::new(100, 0));
        assert_eq!(p.currency, "USD");
        assert_eq!(s.payments.get(p.id).await.unwrap(), p);
    }

    #[tokio::test]
    async fn payment_by_another_user_is_rejected() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = test_support::reservation(&s, &f).await;
        let u2 = test_support::user(&s, "otro@example.com").await;
        let err = s.payments.create(test_support::payment_input(v.id, u2.id)).await.unwrap_err();
        assert_eq!(err, ServiceError::invalid(PAYER_MISMATCH));
        assert!(s.payments.list(Pagination::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn switching_only_the_user_is_rechecked() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = test_support::reservation(&s, &f).await;
        let u2 = test_support::user(&s, "otro@example.com").await;
        let p = s.payments.create(test_support::payment_input(v.id, f.user.id)).await.unwrap();
        let err = s.payments
            .update(p.id, UpdatePaymentInput { user_id: Some(u2.id), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::invalid(PAYER_MISMATCH));
    }

    #[tokio::test]
    async fn patch_merges_and_parses_dates_only_when_present() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = test_support::reservation(&s, &f).await;
        let p = s.payments.create(test_support::payment_input(v.id, f.user.id)).await.unwrap();

        let paid = s.payments
            .update(p.id, UpdatePaymentInput { status: Some(PaymentStatus::Paid), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(paid.status, PaymentStatus::Paid);
        assert_eq!(paid.paid_at, p.paid_at);

        let err = s.payments
            .update(p.id, UpdatePaymentInput { paid_at: Some("31/12/2024".into()), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::invalid("Invalid date value for paidAt."));
    }

    #[tokio::test]
    async fn switching_only_the_reservation_is_rechecked() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = test_support::reservation(&s, &f).await;
        let u2 = test_support::user(&s, "otro@example.com").await;
        let v2 = s.reservations
            .create(test_support::reservation_input(u2.id, f.restaurant.id, f.table.id))
            .await
            .unwrap();
        let p = s.payments.create(test_support::payment_input(v.id, f.user.id)).await.unwrap();

        let err = s.payments
            .update(p.id, UpdatePaymentInput { reservation_id: Some(v2.id), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::invalid(PAYER_MISMATCH));
        assert_eq!(s.payments.get(p.id).await.unwrap(), p);
    }

    #[tokio::test]
    async fn reservation_handed_to_another_user_fails_the_next_update() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = test_support::reservation(&s, &f).await;
        let u2 = test_support::user(&s, "otro@example.com").await;
        let p = s.payments.create(test_support::payment_input(v.id, f.user.id)).await.unwrap();

        s.reservations
            .update(v.id, crate::services::UpdateReservationInput { user_id: Some(u2.id), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(s.payments.get(p.id).await.unwrap().reservation.user.id, u2.id);

        let err = s.payments.update(p.id, UpdatePaymentInput::default()).await.unwrap_err();
        assert_eq!(err, ServiceError::invalid(PAYER_MISMATCH));
        let moved = s.payments
            .update(p.id, UpdatePaymentInput { user_id: Some(u2.id), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(moved.user.id, u2.id);
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let f = test_support::booking_fixture(&s).await;
        let v = test_support::reservation(&s, &f).await;
        let p = s.payments.create(test_support::payment_input(v.id, f.user.id)).await.unwrap();
        assert_eq!(s.payments.update(p.id, UpdatePaymentInput::default()).await.unwrap(), p);
        assert_eq!(s.payments.get(p.id).await.unwrap(), p);
    }

    #[test]
    fn currency_must_be_three_letters() {
        let mut input = test_support::payment_input(Uuid::nil(), Uuid::nil());
        input.currency = "us".into();
        assert!(input.validate().unwrap_err().field_errors().contains_key("currency"));
    }
}
