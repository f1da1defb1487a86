use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use service::domain::Restaurant;
use service::services::{CreateRestaurantInput, UpdateRestaurantInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub opening_hours: Option<String>,
    pub capacity: i32,
    pub image_id: Option<Uuid>,
    pub image_url: Option<String>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            address: r.address,
            opening_hours: r.opening_hours,
            capacity: r.capacity,
            image_id: r.image.as_ref().map(|i| i.id),
            image_url: r.image.map(|i| i.url),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list).post(create))
        .route("/restaurants/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [RestaurantResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<RestaurantResponse>>, JsonApiError> {
    let rows = state.services.restaurants.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = RestaurantResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<RestaurantResponse>, JsonApiError> {
    Ok(Json(state.services.restaurants.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/restaurants", tag = "restaurants",
    request_body = CreateRestaurantInput,
    responses(
        (status = 201, description = "Created", body = RestaurantResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateRestaurantInput>,
) -> Result<(StatusCode, Json<RestaurantResponse>), JsonApiError> {
    let created = state.services.restaurants.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = Uuid, Path,)),
    request_body = UpdateRestaurantInput,
    responses(
        (status = 200, description = "Updated", body = RestaurantResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateRestaurantInput>,
) -> Result<Json<RestaurantResponse>, JsonApiError> {
    let updated = state.services.restaurants.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.restaurants.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
