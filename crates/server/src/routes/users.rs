use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use service::domain::User;
use service::services::{CreateUserInput, UpdateUserInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub names: String,
    pub phone: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self { id: u.id, email: u.email, names: u.names, phone: u.phone }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/users", tag = "users",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [UserResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<UserResponse>>, JsonApiError> {
    let rows = state.services.users.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = UserResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<UserResponse>, JsonApiError> {
    Ok(Json(state.services.users.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = CreateUserInput,
    responses(
        (status = 201, description = "Created", body = UserResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUserInput>,
) -> Result<(StatusCode, Json<UserResponse>), JsonApiError> {
    let created = state.services.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = Uuid, Path,)),
    request_body = UpdateUserInput,
    responses(
        (status = 200, description = "Updated", body = UserResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateUserInput>,
) -> Result<Json<UserResponse>, JsonApiError> {
    let updated = state.services.users.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
