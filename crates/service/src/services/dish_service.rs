//! Dishes sit under a menu and a restaurant, and the two must agree.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Dish, Image, Menu, Restaurant};
use crate::errors::ServiceError;
use crate::images::{patch_image, resolve_image};
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};
use crate::serde_ext::{optional_id, patch_id};
use crate::validation::non_negative;

pub const MENU_RESTAURANT_MISMATCH: &str = "Menu does not belong to the specified restaurant.";
pub const RESTAURANT_MENU_MISMATCH: &str = "The provided restaurant does not match the current menu.";

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateDishInput {
    pub restaurant_id: Uuid,
    pub menu_id: Uuid,
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(custom(function = non_negative))]
    pub price: Decimal,
    #[serde(default, deserialize_with = "optional_id")]
    pub image_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateDishInput {
    pub restaurant_id: Option<Uuid>,
    pub menu_id: Option<Uuid>,
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(custom(function = non_negative))]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "patch_id", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Uuid))]
    pub image_id: Option<Option<Uuid>>,
}

pub struct DishService {
    dishes: Repo<Dish>,
    restaurants: Repo<Restaurant>,
    menus: Repo<Menu>,
    images: Repo<Image>,
}

impl DishService {
    pub fn new(dishes: Repo<Dish>, restaurants: Repo<Restaurant>, menus: Repo<Menu>, images: Repo<Image>) -> Self {
        Self { dishes, restaurants, menus, images }
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Dish>, ServiceError> {
        self.dishes.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Dish, ServiceError> {
        find_required(self.dishes.as_ref(), id).await
    }

    #[instrument(skip_all, fields(restaurant_id = %input.restaurant_id, menu_id = %input.menu_id))]
    pub async fn create(&self, input: CreateDishInput) -> Result<Dish, ServiceError> {
        let restaurant = find_required(self.restaurants.as_ref(), input.restaurant_id).await?;
        let menu = find_required(self.menus.as_ref(), input.menu_id).await?;
        let image = resolve_image(self.images.as_ref(), input.image_id).await?;
        ensure_same_restaurant(&menu, &restaurant, MENU_RESTAURANT_MISMATCH)?;

        let dish = Dish {
            id: Uuid::new_v4(),
            restaurant,
            menu,
            name: input.name,
            description: input.description,
            price: input.price,
            image,
        };
        let dish = self.dishes.create(dish).await?;
        info!(dish_id = %dish.id, "dish_created");
        Ok(dish)
    }

    /// A new menu is checked against the effective restaurant; a restaurant change
    /// on its own is checked against the dish's current menu.
    #[instrument(skip(self, input), fields(dish_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateDishInput) -> Result<Dish, ServiceError> {
        let existing = self.get(id).await?;

        let restaurant = match input.restaurant_id {
            Some(rid) => find_required(self.restaurants.as_ref(), rid).await?,
            None => existing.restaurant.clone(),
        };
        let menu = match input.menu_id {
            Some(mid) => {
                let menu = find_required(self.menus.as_ref(), mid).await?;
                ensure_same_restaurant(&menu, &restaurant, MENU_RESTAURANT_MISMATCH)?;
                menu
            }
            None => {
                if input.restaurant_id.is_some() {
                    ensure_same_restaurant(&existing.menu, &restaurant, RESTAURANT_MENU_MISMATCH)?;
                }
                existing.menu.clone()
            }
        };
        let image = patch_image(self.images.as_ref(), existing.image.clone(), input.image_id).await?;

        let updated = Dish {
            restaurant,
            menu,
            name: input.name.unwrap_or(existing.name),
            description: input.description.or(existing.description),
            price: input.price.unwrap_or(existing.price),
            image,
            ..existing
        };
        let updated = self.dishes.update(updated).await?;
        info!(dish_id = %updated.id, "dish_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(dish_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.dishes.as_ref(), id).await?;
        info!(dish_id = %id, "dish_deleted");
        Ok(())
    }
}

fn ensure_same_restaurant(menu: &Menu, restaurant: &Restaurant, message: &str) -> Result<(), ServiceError> {
    if menu.restaurant.id != restaurant.id {
        warn!(menu_id = %menu.id, restaurant_id = %restaurant.id, "dish_menu_restaurant_mismatch");
        return Err(ServiceError::consistency(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn input(restaurant_id: Uuid, menu_id: Uuid) -> CreateDishInput {
        CreateDishInput {
            restaurant_id,
            menu_id,
            name: "Paella".into(),
            description: None,
            price: Decimal::new(1850, 2),
            image_id: None,
        }
    }

    #[tokio::test]
    async fn create_with_matching_menu_succeeds() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        let m = test_support::menu(&s, r.id, "Cena").await;
        let d = s.dishes.create(input(r.id, m.id)).await.unwrap();
        assert_eq!(d.menu.id, m.id);
        assert_eq!(s.dishes.get(d.id).await.unwrap(), d);
    }

    #[tokio::test]
    async fn create_with_foreign_menu_is_rejected() {
        let s = test_support::services();
        let r1 = test_support::restaurant(&s, "Uno").await;
        let r2 = test_support::restaurant(&s, "Dos").await;
        let m2 = test_support::menu(&s, r2.id, "Otra").await;
        let err = s.dishes.create(input(r1.id, m2.id)).await.unwrap_err();
        assert_eq!(err, ServiceError::invalid(MENU_RESTAURANT_MISMATCH));
        assert!(s.dishes.list(Pagination::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_references_are_not_found() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        let missing = Uuid::new_v4();
        let err = s.dishes.create(input(r.id, missing)).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Menu", missing));
        let err = s.dishes.create(input(missing, missing)).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Restaurant", missing));
    }

    #[tokio::test]
    async fn restaurant_only_change_checks_current_menu() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Uno").await;
        let r2 = test_support::restaurant(&s, "Dos").await;
        let m1 = test_support::menu(&s, r.id, "Cena").await;
        let d1 = s.dishes.create(input(r.id, m1.id)).await.unwrap();

        let err = s.dishes
            .update(d1.id, UpdateDishInput { restaurant_id: Some(r2.id), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::invalid(RESTAURANT_MENU_MISMATCH));
        assert_eq!(s.dishes.get(d1.id).await.unwrap(), d1);
    }

    #[tokio::test]
    async fn moving_restaurant_and_menu_together_succeeds() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Uno").await;
        let r2 = test_support::restaurant(&s, "Dos").await;
        let m1 = test_support::menu(&s, r.id, "Cena").await;
        let m2 = test_support::menu(&s, r2.id, "Cena").await;
        let d = s.dishes.create(input(r.id, m1.id)).await.unwrap();

        let moved = s.dishes
            .update(d.id, UpdateDishInput { restaurant_id: Some(r2.id), menu_id: Some(m2.id), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(moved.restaurant.id, r2.id);
        assert_eq!(moved.menu.id, m2.id);
        assert_eq!(moved.name, d.name);
    }

    #[tokio::test]
    async fn new_menu_is_checked_against_existing_restaurant() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Uno").await;
        let r2 = test_support::restaurant(&s, "Dos").await;
        let m1 = test_support::menu(&s, r.id, "Cena").await;
        let m2 = test_support::menu(&s, r2.id, "Cena").await;
        let d = s.dishes.create(input(r.id, m1.id)).await.unwrap();

        let err = s.dishes
            .update(d.id, UpdateDishInput { menu_id: Some(m2.id), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::invalid(MENU_RESTAURANT_MISMATCH));
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        let m = test_support::menu(&s, r.id, "Cena").await;
        let d = s.dishes.create(input(r.id, m.id)).await.unwrap();
        assert_eq!(s.dishes.update(d.id, UpdateDishInput::default()).await.unwrap(), d);
    }
}
