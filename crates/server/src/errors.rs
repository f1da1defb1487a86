use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error body returned by every JSON endpoint.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub message: Option<String>,
    pub code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, message: Option<String>) -> Self {
        Self { status, error: error.to_string(), message, code: None }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.error, message: self.message, code: self.code };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let code = Some(e.code());
        match e {
            ServiceError::NotFound(msg) => Self { status: StatusCode::NOT_FOUND, error: "Not Found".into(), message: Some(msg), code },
            ServiceError::InvalidArgument(msg) => {
                Self { status: StatusCode::BAD_REQUEST, error: "Bad Request".into(), message: Some(msg), code }
            }
            ServiceError::Repository(msg) => {
                error!(error = %msg, "repository failure");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, error: "Internal Server Error".into(), message: None, code }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn service_errors_map_to_status() {
        let e: JsonApiError = ServiceError::not_found("Dish", Uuid::nil()).into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        let e: JsonApiError = ServiceError::invalid("bad").into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message.as_deref(), Some("bad"));
        let e: JsonApiError = ServiceError::Repository("connection reset".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(e.message.is_none());
    }
}
