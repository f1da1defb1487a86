//! Payment endpoints. Only the user who made the reservation may pay for it.
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use service::domain::{Payment, PaymentMethod, PaymentStatus};
use service::services::{CreatePaymentInput, UpdatePaymentInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub paid_at: DateTime<Utc>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            reservation_id: p.reservation.id,
            user_id: p.user.id,
            amount: p.amount,
            currency: p.currency,
            method: p.method,
            status: p.status,
            paid_at: p.paid_at,
            reference: p.reference,
            notes: p.notes,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payments", get(list).post(create))
        .route("/payments/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/payments", tag = "payments",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [PaymentResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<PaymentResponse>>, JsonApiError> {
    let rows = state.services.payments.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/payments/{id}", tag = "payments",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = PaymentResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<PaymentResponse>, JsonApiError> {
    Ok(Json(state.services.payments.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/payments", tag = "payments",
    request_body = CreatePaymentInput,
    responses(
        (status = 201, description = "Created", body = PaymentResponse),
        (status = 400, description = "Validation Error or consistency violation", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePaymentInput>,
) -> Result<(StatusCode, Json<PaymentResponse>), JsonApiError> {
    let created = state.services.payments.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/payments/{id}", tag = "payments",
    params(("id" = Uuid, Path,)),
    request_body = UpdatePaymentInput,
    responses(
        (status = 200, description = "Updated", body = PaymentResponse),
        (status = 400, description = "Validation Error or consistency violation", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdatePaymentInput>,
) -> Result<Json<PaymentResponse>, JsonApiError> {
    let updated = state.services.payments.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/payments/{id}", tag = "payments",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.payments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
