use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by entity services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// An id lookup resolved to nothing.
    #[error("{0}")]
    NotFound(String),
    /// Malformed input or a cross-entity consistency violation.
    #[error("{0}")]
    InvalidArgument(String),
    /// Storage failure, propagated unchanged.
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: Uuid) -> Self {
        Self::NotFound(format!("{} with id {} not found.", entity, id))
    }

    pub fn invalid(msg: impl Into<String>) -> Self { Self::InvalidArgument(msg.into()) }

    /// Cross-entity rule violation; reported to callers the same way as bad input.
    pub fn consistency(msg: impl Into<String>) -> Self { Self::InvalidArgument(msg.into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 1003,
            ServiceError::InvalidArgument(_) => 1001,
            ServiceError::Repository(_) => 1200,
        }
    }
}

#[cfg(feature = "seaorm")]
impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Repository(e.to_string()) }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => ServiceError::InvalidArgument(msg),
            models::errors::ModelError::Db(msg) => ServiceError::Repository(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let id = Uuid::nil();
        let e = ServiceError::not_found("Menu", id);
        assert_eq!(e.to_string(), format!("Menu with id {} not found.", id));
        assert_eq!(e.code(), 1003);
    }

    #[test]
    fn model_errors_map_by_kind() {
        let e: ServiceError = models::errors::ModelError::Db("boom".into()).into();
        assert!(matches!(e, ServiceError::Repository(_)));
        let e: ServiceError = models::errors::ModelError::Validation("bad".into()).into();
        assert_eq!(e, ServiceError::InvalidArgument("bad".into()));
    }

    #[cfg(feature = "seaorm")]
    #[test]
    fn db_errors_surface_as_repository_failures() {
        let e: ServiceError = sea_orm::DbErr::Custom("connection reset".into()).into();
        assert!(matches!(e, ServiceError::Repository(ref m) if m.contains("connection reset")));
        assert_eq!(e.code(), 1200);
    }
}
