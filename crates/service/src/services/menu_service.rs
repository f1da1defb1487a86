use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Menu, Restaurant};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};
use crate::validation::non_negative;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuInput {
    pub restaurant_id: Uuid,
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(custom(function = non_negative))]
    pub price: Option<Decimal>,
    #[validate(url, length(max = 255))]
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuInput {
    pub restaurant_id: Option<Uuid>,
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(custom(function = non_negative))]
    pub price: Option<Decimal>,
    #[validate(url, length(max = 255))]
    pub cover_image_url: Option<String>,
}

pub struct MenuService {
    menus: Repo<Menu>,
    restaurants: Repo<Restaurant>,
}

impl MenuService {
    pub fn new(menus: Repo<Menu>, restaurants: Repo<Restaurant>) -> Self { Self { menus, restaurants } }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Menu>, ServiceError> {
        self.menus.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Menu, ServiceError> {
        find_required(self.menus.as_ref(), id).await
    }

    #[instrument(skip_all, fields(restaurant_id = %input.restaurant_id))]
    pub async fn create(&self, input: CreateMenuInput) -> Result<Menu, ServiceError> {
        let restaurant = find_required(self.restaurants.as_ref(), input.restaurant_id).await?;
        let menu = Menu {
            id: Uuid::new_v4(),
            restaurant,
            name: input.name,
            description: input.description,
            price: input.price,
            cover_image_url: input.cover_image_url,
        };
        let menu = self.menus.create(menu).await?;
        info!(menu_id = %menu.id, "menu_created");
        Ok(menu)
    }

    /// Dishes already filed under this menu are not re-checked when the menu moves.
    #[instrument(skip(self, input), fields(menu_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateMenuInput) -> Result<Menu, ServiceError> {
        let existing = self.get(id).await?;
        let restaurant = match input.restaurant_id {
            Some(rid) => find_required(self.restaurants.as_ref(), rid).await?,
            None => existing.restaurant.clone(),
        };
        let updated = Menu {
            restaurant,
            name: input.name.unwrap_or(existing.name),
            description: input.description.or(existing.description),
            price: input.price.or(existing.price),
            cover_image_url: input.cover_image_url.or(existing.cover_image_url),
            ..existing
        };
        let updated = self.menus.update(updated).await?;
        info!(menu_id = %updated.id, "menu_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(menu_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.menus.as_ref(), id).await?;
        info!(menu_id = %id, "menu_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn create_roundtrips_optional_fields() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        let m = s.menus
            .create(CreateMenuInput {
                price: Some(Decimal::new(2500, 2)),
                cover_image_url: Some("https://img.example.com/menu.png".into()),
                ..test_support::menu_input(r.id, "Cena")
            })
            .await
            .unwrap();
        let fetched = s.menus.get(m.id).await.unwrap();
        assert_eq!(fetched, m);
        assert_eq!(fetched.price, Some(Decimal::new(2500, 2)));
        assert_eq!(fetched.restaurant.id, r.id);
    }

    #[tokio::test]
    async fn unknown_restaurant_on_update_is_not_found() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        let m = test_support::menu(&s, r.id, "Cena").await;
        let missing = Uuid::new_v4();
        let err = s.menus
            .update(m.id, UpdateMenuInput { restaurant_id: Some(missing), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Restaurant", missing));
        assert_eq!(s.menus.get(m.id).await.unwrap(), m);
    }

    #[test]
    fn cover_image_must_be_a_url() {
        let input = CreateMenuInput {
            cover_image_url: Some("not a url".into()),
            ..test_support::menu_input(Uuid::nil(), "Cena")
        };
        let errs = input.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("cover_image_url"));
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        let m = s.menus
            .create(CreateMenuInput { price: Some(Decimal::new(2500, 2)), ..test_support::menu_input(r.id, "Cena") })
            .await
            .unwrap();
        assert_eq!(s.menus.update(m.id, UpdateMenuInput::default()).await.unwrap(), m);
        assert_eq!(s.menus.get(m.id).await.unwrap(), m);
    }
}
