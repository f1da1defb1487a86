use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Serialize;
use service::domain::{BillingCycle, PlanStatus, SubscriptionPlan, SubscriptionTier};
use service::services::{CreateSubscriptionPlanInput, UpdateSubscriptionPlanInput};
use uuid::Uuid;

use crate::errors::{ErrorBody, JsonApiError};
use crate::extract::ValidatedJson;
use crate::routes::PageQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlanResponse {
    pub id: Uuid,
    pub name: String,
    pub tier: SubscriptionTier,
    pub price: Decimal,
    pub billing_cycle: BillingCycle,
    pub status: PlanStatus,
}

impl From<SubscriptionPlan> for SubscriptionPlanResponse {
    fn from(p: SubscriptionPlan) -> Self {
        Self { id: p.id, name: p.name, tier: p.tier, price: p.price, billing_cycle: p.billing_cycle, status: p.status }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subscription-plans", get(list).post(create))
        .route("/subscription-plans/:id", get(fetch).put(update).delete(remove))
}

#[utoipa::path(
    get, path = "/subscription-plans", tag = "subscription-plans",
    params(PageQuery),
    responses((status = 200, description = "OK", body = [SubscriptionPlanResponse]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<SubscriptionPlanResponse>>, JsonApiError> {
    let rows = state.services.plans.list(state.page(q.offset, q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/subscription-plans/{id}", tag = "subscription-plans",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 200, description = "OK", body = SubscriptionPlanResponse),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn fetch(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SubscriptionPlanResponse>, JsonApiError> {
    Ok(Json(state.services.plans.get(id).await?.into()))
}

#[utoipa::path(
    post, path = "/subscription-plans", tag = "subscription-plans",
    request_body = CreateSubscriptionPlanInput,
    responses(
        (status = 201, description = "Created", body = SubscriptionPlanResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Referenced entity not found", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSubscriptionPlanInput>,
) -> Result<(StatusCode, Json<SubscriptionPlanResponse>), JsonApiError> {
    let created = state.services.plans.create(input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/subscription-plans/{id}", tag = "subscription-plans",
    params(("id" = Uuid, Path,)),
    request_body = UpdateSubscriptionPlanInput,
    responses(
        (status = 200, description = "Updated", body = SubscriptionPlanResponse),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<UpdateSubscriptionPlanInput>,
) -> Result<Json<SubscriptionPlanResponse>, JsonApiError> {
    let updated = state.services.plans.update(id, input).await?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/subscription-plans/{id}", tag = "subscription-plans",
    params(("id" = Uuid, Path,)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBody)
    )
)]
pub async fn remove(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    state.services.plans.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
