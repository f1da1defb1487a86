use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use service::domain::DiningTable;
use service::services::{CreateTableInput, UpdateTableInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub id: Uuid,
    pub section_id: Uuid,
    pub restaurant_id: Uuid,
    pub table_number: i32,
    pub capacity: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub width: i32,
    pub height: i32,
    pub image_id: Option<Uuid>,
    pub image_url: Option<String>,
}

impl From<DiningTable> for TableResponse {
    fn from(t: DiningTable) -> Self {
        Self {
            id: t.id,
            section_id: t.section.id,
            restaurant_id: t.restaurant().id,
            table_number: t.table_number,
            capacity: t.capacity,
            position_x: t.position_x,
            position_y: t.position_y,
            width: t.width,
            height: t.height,
            image_id: t.image.as_ref().map(|i| i.id),
            image_url: t.image.map(|i| i.url),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tables", get(list).post(create))
        .route("/tables/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/tables", tag = "tables",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [TableResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<TableResponse>>, JsonApiError> {
    let rows = state.services.tables.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/tables/{id}", tag = "tables",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = TableResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<TableResponse>, JsonApiError> {
    Ok(Json(state.services.tables.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/tables", tag = "tables",
    request_body = CreateTableInput,
    responses(
        (status = 201, description = "Created", body = TableResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTableInput>,
) -> Result<(StatusCode, Json<TableResponse>), JsonApiError> {
    let created = state.services.tables.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/tables/{id}", tag = "tables",
    params(("id" = Uuid, Path,)),
    request_body = UpdateTableInput,
    responses(
        (status = 200, description = "Updated", body = TableResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateTableInput>,
) -> Result<Json<TableResponse>, JsonApiError> {
    let updated = state.services.tables.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/tables/{id}", tag = "tables",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.tables.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
