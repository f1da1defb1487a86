use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use service::domain::Image;
use service::services::{CreateImageInput, UpdateImageInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: Uuid,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<Image> for ImageResponse {
    fn from(i: Image) -> Self {
        Self { id: i.id, url: i.url, title: i.title, description: i.description, created_at: i.created_at, is_active: i.is_active }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/images", get(list).post(create))
        .route("/images/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/images", tag = "images",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [ImageResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<ImageResponse>>, JsonApiError> {
    let rows = state.services.images.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/images/{id}", tag = "images",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = ImageResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<ImageResponse>, JsonApiError> {
    Ok(Json(state.services.images.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/images", tag = "images",
    request_body = CreateImageInput,
    responses(
        (status = 201, description = "Created", body = ImageResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateImageInput>,
) -> Result<(StatusCode, Json<ImageResponse>), JsonApiError> {
    let created = state.services.images.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/images/{id}", tag = "images",
    params(("id" = Uuid, Path,)),
    request_body = UpdateImageInput,
    responses(
        (status = 200, description = "Updated", body = ImageResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateImageInput>,
) -> Result<Json<ImageResponse>, JsonApiError> {
    let updated = state.services.images.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/images/{id}", tag = "images",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.images.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
