//! JSON body extractor that runs `validator` rules before a handler sees the input.
use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use crate::errors::JsonApiError;

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Body", Some(e.body_text())))?;
        if let Err(e) = value.validate() {
            debug!(errors = %e, "input rejected");
            return Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())));
        }
        Ok(Self(value))
    }
}
