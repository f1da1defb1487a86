//! Dish endpoints. A dish whose menu belongs to another restaurant is rejected with 400.
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Serialize;
use service::domain::Dish;
use service::services::{CreateDishInput, UpdateDishInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub menu_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_id: Option<Uuid>,
    pub image_url: Option<String>,
}

impl From<Dish> for DishResponse {
    fn from(d: Dish) -> Self {
        Self {
            id: d.id,
            restaurant_id: d.restaurant.id,
            menu_id: d.menu.id,
            name: d.name,
            description: d.description,
            price: d.price,
            image_id: d.image.as_ref().map(|i| i.id),
            image_url: d.image.map(|i| i.url),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dishes", get(list).post(create))
        .route("/dishes/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/dishes", tag = "dishes",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [DishResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<DishResponse>>, JsonApiError> {
    let rows = state.services.dishes.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/dishes/{id}", tag = "dishes",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = DishResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<DishResponse>, JsonApiError> {
    Ok(Json(state.services.dishes.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/dishes", tag = "dishes",
    request_body = CreateDishInput,
    responses(
        (status = 201, description = "Created", body = DishResponse),
        (status = 400, description = "Validation Error or consistency violation", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDishInput>,
) -> Result<(StatusCode, Json<DishResponse>), JsonApiError> {
    let created = state.services.dishes.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/dishes/{id}", tag = "dishes",
    params(("id" = Uuid, Path,)),
    request_body = UpdateDishInput,
    responses(
        (status = 200, description = "Updated", body = DishResponse),
        (status = 400, description = "Validation Error or consistency violation", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateDishInput>,
) -> Result<Json<DishResponse>, JsonApiError> {
    let updated = state.services.dishes.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/dishes/{id}", tag = "dishes",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.dishes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
