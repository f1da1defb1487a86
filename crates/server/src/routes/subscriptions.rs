use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use service::domain::{Subscription, SubscriptionStatus};
use service::services::{CreateSubscriptionInput, UpdateSubscriptionInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub plan_id: Uuid,
    pub starts_on: DateTime<Utc>,
    /// `null` for an open-ended subscription.
    pub ends_on: Option<DateTime<Utc>>,
    pub status: SubscriptionStatus,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(s: Subscription) -> Self {
        Self {
            id: s.id,
            user_id: s.user.id,
            restaurant_id: s.restaurant.id,
            plan_id: s.plan.id,
            starts_on: s.starts_on,
            ends_on: s.ends_on,
            status: s.status,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscriptions", get(list).post(create))
        .route("/subscriptions/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/subscriptions", tag = "subscriptions",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [SubscriptionResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<SubscriptionResponse>>, JsonApiError> {
    let rows = state.services.subscriptions.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/subscriptions/{id}", tag = "subscriptions",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = SubscriptionResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SubscriptionResponse>, JsonApiError> {
    Ok(Json(state.services.subscriptions.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/subscriptions", tag = "subscriptions",
    request_body = CreateSubscriptionInput,
    responses(
        (status = 201, description = "Created", body = SubscriptionResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSubscriptionInput>,
) -> Result<(StatusCode, Json<SubscriptionResponse>), JsonApiError> {
    let created = state.services.subscriptions.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/subscriptions/{id}", tag = "subscriptions",
    params(("id" = Uuid, Path,)),
    request_body = UpdateSubscriptionInput,
    responses(
        (status = 200, description = "Updated", body = SubscriptionResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateSubscriptionInput>,
) -> Result<Json<SubscriptionResponse>, JsonApiError> {
    let updated = state.services.subscriptions.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/subscriptions/{id}", tag = "subscriptions",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.subscriptions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
