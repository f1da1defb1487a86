use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use service::domain::Review;
use service::services::{CreateReviewInput, UpdateReviewInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self { id: r.id, user_id: r.user.id, restaurant_id: r.restaurant.id, rating: r.rating, comment: r.comment, created_at: r.created_at }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reviews", get(list).post(create))
        .route("/reviews/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/reviews", tag = "reviews",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [ReviewResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<ReviewResponse>>, JsonApiError> {
    let rows = state.services.reviews.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/reviews/{id}", tag = "reviews",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = ReviewResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<ReviewResponse>, JsonApiError> {
    Ok(Json(state.services.reviews.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/reviews", tag = "reviews",
    request_body = CreateReviewInput,
    responses(
        (status = 201, description = "Created", body = ReviewResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateReviewInput>,
) -> Result<(StatusCode, Json<ReviewResponse>), JsonApiError> {
    let created = state.services.reviews.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/reviews/{id}", tag = "reviews",
    params(("id" = Uuid, Path,)),
    request_body = UpdateReviewInput,
    responses(
        (status = 200, description = "Updated", body = ReviewResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateReviewInput>,
) -> Result<Json<ReviewResponse>, JsonApiError> {
    let updated = state.services.reviews.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/reviews/{id}", tag = "reviews",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
