use std::time::Instant;

use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use common::types::{Health, ServiceInfo};
use serde::{Deserialize, Serialize};
use service::SeedSummary;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::{ErrorBody, JsonApiError};
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod dishes;
pub mod images;
pub mod layout_objects;
pub mod menus;
pub mod payments;
pub mod reservations;
pub mod restaurants;
pub mod reviews;
pub mod sections;
pub mod subscription_plans;
pub mod subscriptions;
pub mod tables;
pub mod users;

/// `?offset=&limit=` on every list endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Rows to skip (default 0).
    pub offset: Option<u64>,
    /// Page size (default 50, at most 100).
    pub limit: Option<u64>,
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service banner")))]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo { name: env!("CARGO_PKG_NAME"), version: env!("CARGO_PKG_VERSION") })
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub message: String,
    pub duration_ms: u64,
    pub summary: SeedSummary,
}

#[utoipa::path(
    post, path = "/seed", tag = "seed",
    responses(
        (status = 200, description = "Demo data created", body = SeedResponse),
        (status = 500, description = "Seed execution failed", body = ErrorBody)
    )
)]
pub async fn seed(State(state): State<AppState>) -> Result<Json<SeedResponse>, JsonApiError> {
    let started = Instant::now();
    let summary = service::seed_demo_data(&state.services).await.map_err(|e| {
        error!(error = %e, "seed execution failed");
        JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Seed Failed", Some("Failed to seed database.".into()))
    })?;
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(duration_ms, "seed_request_completed");
    Ok(Json(SeedResponse { message: "Seed completed successfully.".into(), duration_ms, summary }))
}

/// Build the full application router: entity CRUD, seed, health and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .merge(users::router())
        .merge(images::router())
        .merge(subscription_plans::router())
        .merge(restaurants::router())
        .merge(sections::router())
        .merge(tables::router())
        .merge(menus::router())
        .merge(dishes::router())
        .merge(reservations::router())
        .merge(payments::router())
        .merge(reviews::router())
        .merge(subscriptions::router())
        .merge(layout_objects::router())
        .route("/seed", post(seed));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use configs::PaginationConfig;
    use service::Services;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(Services::in_memory(), PaginationConfig::default());
        build_router(state, CorsLayer::very_permissive())
    }

    async fn call(app: Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let res = app.oneshot(req.body(body).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = call(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_id_is_404_with_message() {
        let id = uuid::Uuid::new_v4();
        let (status, body) = call(app(), "GET", &format!("/menus/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], format!("Menu with id {id} not found."));
    }

    #[tokio::test]
    async fn shape_errors_are_400_before_service() {
        let (status, body) = call(
            app(),
            "POST",
            "/restaurants",
            Some(serde_json::json!({"name": "Casa", "address": "Calle 1", "capacity": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation Error");
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let (status, body) = call(app(), "POST", "/users", Some(serde_json::json!({"email": 1}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid Body");
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, body) = call(app(), "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/dishes/{id}"].is_object());
    }
}
