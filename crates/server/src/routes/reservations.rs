//! Reservation endpoints. The booked table must sit in the reserved restaurant.
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use service::domain::{Reservation, ReservationStatus};
use service::services::{CreateReservationInput, UpdateReservationInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub reservation_date: DateTime<Utc>,
    pub reservation_time: String,
    pub guest_count: i32,
    pub status: ReservationStatus,
    pub notes: Option<String>,
}

impl From<Reservation> for ReservationResponse {
    fn from(v: Reservation) -> Self {
        Self {
            id: v.id,
            user_id: v.user.id,
            restaurant_id: v.restaurant.id,
            table_id: v.table.id,
            reservation_date: v.reservation_date,
            reservation_time: v.reservation_time,
            guest_count: v.guest_count,
            status: v.status,
            notes: v.notes,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reservations", get(list).post(create))
        .route("/reservations/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/reservations", tag = "reservations",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [ReservationResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<ReservationResponse>>, JsonApiError> {
    let rows = state.services.reservations.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/reservations/{id}", tag = "reservations",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = ReservationResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<ReservationResponse>, JsonApiError> {
    Ok(Json(state.services.reservations.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/reservations", tag = "reservations",
    request_body = CreateReservationInput,
    responses(
        (status = 201, description = "Created", body = ReservationResponse),
        (status = 400, description = "Validation Error or consistency violation", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateReservationInput>,
) -> Result<(StatusCode, Json<ReservationResponse>), JsonApiError> {
    let created = state.services.reservations.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/reservations/{id}", tag = "reservations",
    params(("id" = Uuid, Path,)),
    request_body = UpdateReservationInput,
    responses(
        (status = 200, description = "Updated", body = ReservationResponse),
        (status = 400, description = "Validation Error or consistency violation", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateReservationInput>,
) -> Result<Json<ReservationResponse>, JsonApiError> {
    let updated = state.services.reservations.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/reservations/{id}", tag = "reservations",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.reservations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
