use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Image, Restaurant};
use crate::errors::ServiceError;
use crate::images::{patch_image, resolve_image};
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};
use crate::serde_ext::{optional_id, patch_id};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantInput {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(length(max = 120))]
    pub opening_hours: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[serde(default, deserialize_with = "optional_id")]
    pub image_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantInput {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 120))]
    pub opening_hours: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    /// Omit to keep, `null` to clear.
    #[serde(default, deserialize_with = "patch_id", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Uuid))]
    pub image_id: Option<Option<Uuid>>,
}

pub struct RestaurantService {
    restaurants: Repo<Restaurant>,
    images: Repo<Image>,
}

impl RestaurantService {
    pub fn new(restaurants: Repo<Restaurant>, images: Repo<Image>) -> Self { Self { restaurants, images } }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Restaurant>, ServiceError> {
        self.restaurants.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Restaurant, ServiceError> {
        find_required(self.restaurants.as_ref(), id).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: CreateRestaurantInput) -> Result<Restaurant, ServiceError> {
        let image = resolve_image(self.images.as_ref(), input.image_id).await?;
        let restaurant = Restaurant {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            address: input.address,
            opening_hours: input.opening_hours,
            capacity: input.capacity,
            image,
        };
        let restaurant = self.restaurants.create(restaurant).await?;
        info!(restaurant_id = %restaurant.id, "restaurant_created");
        Ok(restaurant)
    }

    #[instrument(skip(self, input), fields(restaurant_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateRestaurantInput) -> Result<Restaurant, ServiceError> {
        let existing = self.get(id).await?;
        let image = patch_image(self.images.as_ref(), existing.image.clone(), input.image_id).await?;
        let updated = Restaurant {
            name: input.name.unwrap_or(existing.name),
            description: input.description.or(existing.description),
            address: input.address.unwrap_or(existing.address),
            opening_hours: input.opening_hours.or(existing.opening_hours),
            capacity: input.capacity.unwrap_or(existing.capacity),
            image,
            ..existing
        };
        let updated = self.restaurants.update(updated).await?;
        info!(restaurant_id = %updated.id, "restaurant_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(restaurant_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.restaurants.as_ref(), id).await?;
        info!(restaurant_id = %id, "restaurant_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn create_with_image_resolves_it() {
        let s = test_support::services();
        let img = test_support::image(&s).await;
        let r = s.restaurants
            .create(CreateRestaurantInput { image_id: Some(img.id), ..test_support::restaurant_input("Casa") })
            .await
            .unwrap();
        assert_eq!(r.image.as_ref().map(|i| i.id), Some(img.id));
        assert_eq!(s.restaurants.get(r.id).await.unwrap(), r);
    }

    #[tokio::test]
    async fn unknown_image_is_not_found() {
        let s = test_support::services();
        let missing = Uuid::new_v4();
        let err = s.restaurants
            .create(CreateRestaurantInput { image_id: Some(missing), ..test_support::restaurant_input("Casa") })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Image", missing));
    }

    #[tokio::test]
    async fn omitted_image_is_kept_and_null_clears() {
        let s = test_support::services();
        let img = test_support::image(&s).await;
        let r = s.restaurants
            .create(CreateRestaurantInput { image_id: Some(img.id), ..test_support::restaurant_input("Casa") })
            .await
            .unwrap();

        let kept = s.restaurants
            .update(r.id, UpdateRestaurantInput { capacity: Some(80), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(kept.image.as_ref().map(|i| i.id), Some(img.id));
        assert_eq!(kept.capacity, 80);

        let patch: UpdateRestaurantInput = serde_json::from_str(r#"{"imageId":null}"#).unwrap();
        let cleared = s.restaurants.update(r.id, patch).await.unwrap();
        assert!(cleared.image.is_none());
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        assert_eq!(s.restaurants.update(r.id, UpdateRestaurantInput::default()).await.unwrap(), r);
    }

    #[test]
    fn zero_capacity_fails_shape_validation() {
        let input = CreateRestaurantInput { capacity: 0, ..test_support::restaurant_input("Casa") };
        assert!(input.validate().is_err());
    }
}
