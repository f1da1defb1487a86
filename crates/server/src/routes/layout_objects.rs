use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use service::domain::LayoutObject;
use service::services::{CreateLayoutObjectInput, UpdateLayoutObjectInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutObjectResponse {
    pub id: Uuid,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    pub image_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub section_ids: Vec<Uuid>,
}

impl From<LayoutObject> for LayoutObjectResponse {
    fn from(o: LayoutObject) -> Self {
        Self {
            id: o.id,
            name: o.name,
            object_type: o.object_type,
            position_x: o.position_x,
            position_y: o.position_y,
            width: o.width,
            height: o.height,
            image_id: o.image.as_ref().map(|i| i.id),
            image_url: o.image.map(|i| i.url),
            section_ids: o.section_ids,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/layout-objects", get(list).post(create))
        .route("/layout-objects/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/layout-objects", tag = "layout-objects",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [LayoutObjectResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<LayoutObjectResponse>>, JsonApiError> {
    let rows = state.services.layout_objects.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/layout-objects/{id}", tag = "layout-objects",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = LayoutObjectResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<LayoutObjectResponse>, JsonApiError> {
    Ok(Json(state.services.layout_objects.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/layout-objects", tag = "layout-objects",
    request_body = CreateLayoutObjectInput,
    responses(
        (status = 201, description = "Created", body = LayoutObjectResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateLayoutObjectInput>,
) -> Result<(StatusCode, Json<LayoutObjectResponse>), JsonApiError> {
    let created = state.services.layout_objects.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/layout-objects/{id}", tag = "layout-objects",
    params(("id" = Uuid, Path,)),
    request_body = UpdateLayoutObjectInput,
    responses(
        (status = 200, description = "Updated", body = LayoutObjectResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateLayoutObjectInput>,
) -> Result<Json<LayoutObjectResponse>, JsonApiError> {
    let updated = state.services.layout_objects.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/layout-objects/{id}", tag = "layout-objects",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.layout_objects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
