use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use service::domain::Section;
use service::services::{CreateSectionInput, UpdateSectionInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Section> for SectionResponse {
    fn from(s: Section) -> Self {
        Self { id: s.id, restaurant_id: s.restaurant.id, name: s.name, description: s.description }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sections", get(list).post(create))
        .route("/sections/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/sections", tag = "sections",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [SectionResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<SectionResponse>>, JsonApiError> {
    let rows = state.services.sections.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/sections/{id}", tag = "sections",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = SectionResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SectionResponse>, JsonApiError> {
    Ok(Json(state.services.sections.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/sections", tag = "sections",
    request_body = CreateSectionInput,
    responses(
        (status = 201, description = "Created", body = SectionResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSectionInput>,
) -> Result<(StatusCode, Json<SectionResponse>), JsonApiError> {
    let created = state.services.sections.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/sections/{id}", tag = "sections",
    params(("id" = Uuid, Path,)),
    request_body = UpdateSectionInput,
    responses(
        (status = 200, description = "Updated", body = SectionResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateSectionInput>,
) -> Result<Json<SectionResponse>, JsonApiError> {
    let updated = state.services.sections.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/sections/{id}", tag = "sections",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.sections.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
