use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Serialize;
use service::domain::Menu;
use service::services::{CreateMenuInput, UpdateMenuInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub cover_image_url: Option<String>,
}

impl From<Menu> for MenuResponse {
    fn from(m: Menu) -> Self {
        Self { id: m.id, restaurant_id: m.restaurant.id, name: m.name, description: m.description, price: m.price, cover_image_url: m.cover_image_url }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/menus", get(list).post(create))
        .route("/menus/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/menus", tag = "menus",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [MenuResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<MenuResponse>>, JsonApiError> {
    let rows = state.services.menus.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/menus/{id}", tag = "menus",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = MenuResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<MenuResponse>, JsonApiError> {
    Ok(Json(state.services.menus.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/menus", tag = "menus",
    request_body = CreateMenuInput,
    responses(
        (status = 201, description = "Created", body = MenuResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMenuInput>,
) -> Result<(StatusCode, Json<MenuResponse>), JsonApiError> {
    let created = state.services.menus.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/menus/{id}", tag = "menus",
    params(("id" = Uuid, Path,)),
    request_body = UpdateMenuInput,
    responses(
        (status = 200, description = "Updated", body = MenuResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateMenuInput>,
) -> Result<Json<MenuResponse>, JsonApiError> {
    let updated = state.services.menus.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/menus/{id}", tag = "menus",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.menus.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
