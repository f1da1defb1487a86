use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dates::{self, parse_date, parse_optional, DateInput};
use crate::domain::Image;
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateImageInput {
    #[validate(url, length(max = 255))]
    pub url: String,
    #[validate(length(max = 100))]
    pub title: Option<String>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    /// Defaults to now.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub created_at: Option<DateInput>,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageInput {
    #[validate(url, length(max = 255))]
    pub url: Option<String>,
    #[validate(length(max = 100))]
    pub title: Option<String>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = DateTime))]
    pub created_at: Option<DateInput>,
    pub is_active: Option<bool>,
}

pub struct ImageService {
    images: Repo<Image>,
}

impl ImageService {
    pub fn new(images: Repo<Image>) -> Self { Self { images } }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Image>, ServiceError> {
        self.images.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Image, ServiceError> {
        find_required(self.images.as_ref(), id).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: CreateImageInput) -> Result<Image, ServiceError> {
        let created_at = match &input.created_at {
            Some(v) => parse_date(v, "createdAt")?,
            None => dates::now(),
        };
        let image = Image {
            id: Uuid::new_v4(),
            url: input.url,
            title: input.title,
            description: input.description,
            created_at,
            is_active: input.is_active.unwrap_or(true),
        };
        let image = self.images.create(image).await?;
        info!(image_id = %image.id, "image_created");
        Ok(image)
    }

    #[instrument(skip(self, input), fields(image_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateImageInput) -> Result<Image, ServiceError> {
        let existing = self.get(id).await?;
        let created_at = parse_optional(input.created_at.as_ref(), "createdAt")?;
        let updated = Image {
            url: input.url.unwrap_or(existing.url),
            title: input.title.or(existing.title),
            description: input.description.or(existing.description),
            created_at: created_at.unwrap_or(existing.created_at),
            is_active: input.is_active.unwrap_or(existing.is_active),
            ..existing
        };
        let updated = self.images.update(updated).await?;
        info!(image_id = %updated.id, "image_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(image_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.images.as_ref(), id).await?;
        info!(image_id = %id, "image_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn input() -> CreateImageInput {
        CreateImageInput {
            url: "https://img.example.com/front.jpg".into(),
            title: Some("Front".into()),
            description: None,
            created_at: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn defaults_created_at_and_active_flag() {
        let s = test_support::services();
        let before = crate::dates::now();
        let img = s.images.create(input()).await.unwrap();
        assert!(img.is_active);
        assert!(img.created_at >= before);
    }

    #[tokio::test]
    async fn explicit_created_at_is_parsed() {
        let s = test_support::services();
        let img = s.images
            .create(CreateImageInput { created_at: Some("2023-01-15".into()), is_active: Some(false), ..input() })
            .await
            .unwrap();
        assert_eq!(img.created_at.to_rfc3339(), "2023-01-15T00:00:00+00:00");
        assert!(!img.is_active);
    }

    #[tokio::test]
    async fn bad_created_at_is_invalid_argument() {
        let s = test_support::services();
        let err = s.images.create(CreateImageInput { created_at: Some("yesterday".into()), ..input() }).await.unwrap_err();
        assert_eq!(err, ServiceError::InvalidArgument("Invalid date value for createdAt.".into()));
        assert!(s.images.list(Pagination::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let img = s.images.create(input()).await.unwrap();
        assert_eq!(s.images.update(img.id, UpdateImageInput::default()).await.unwrap(), img);
    }
}
