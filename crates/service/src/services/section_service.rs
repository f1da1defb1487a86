use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Restaurant, Section};
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionInput {
    pub restaurant_id: Uuid,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateSectionInput {
    pub restaurant_id: Option<Uuid>,
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

pub struct SectionService {
    sections: Repo<Section>,
    restaurants: Repo<Restaurant>,
}

impl SectionService {
    pub fn new(sections: Repo<Section>, restaurants: Repo<Restaurant>) -> Self { Self { sections, restaurants } }

    pub async fn list(&self, page: Pagination) -> Result<Vec<Section>, ServiceError> {
        self.sections.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Section, ServiceError> {
        find_required(self.sections.as_ref(), id).await
    }

    #[instrument(skip_all, fields(restaurant_id = %input.restaurant_id))]
    pub async fn create(&self, input: CreateSectionInput) -> Result<Section, ServiceError> {
        let restaurant = find_required(self.restaurants.as_ref(), input.restaurant_id).await?;
        let section = Section { id: Uuid::new_v4(), restaurant, name: input.name, description: input.description };
        let section = self.sections.create(section).await?;
        info!(section_id = %section.id, "section_created");
        Ok(section)
    }

    #[instrument(skip(self, input), fields(section_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateSectionInput) -> Result<Section, ServiceError> {
        let existing = self.get(id).await?;
        let restaurant = match input.restaurant_id {
            Some(rid) => find_required(self.restaurants.as_ref(), rid).await?,
            None => existing.restaurant.clone(),
        };
        let updated = Section {
            restaurant,
            name: input.name.unwrap_or(existing.name),
            description: input.description.or(existing.description),
            ..existing
        };
        let updated = self.sections.update(updated).await?;
        info!(section_id = %updated.id, "section_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(section_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.sections.as_ref(), id).await?;
        info!(section_id = %id, "section_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn create_resolves_restaurant() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        let sec = test_support::section(&s, r.id).await;
        assert_eq!(sec.restaurant.id, r.id);
        assert_eq!(s.sections.get(sec.id).await.unwrap(), sec);
    }

    #[tokio::test]
    async fn unknown_restaurant_is_not_found_and_nothing_is_stored() {
        let s = test_support::services();
        let missing = Uuid::new_v4();
        let err = s.sections
            .create(CreateSectionInput { restaurant_id: missing, name: "Patio".into(), description: None })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("Restaurant", missing));
        assert!(s.sections.list(Pagination::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn moving_to_another_restaurant_is_allowed() {
        let s = test_support::services();
        let r1 = test_support::restaurant(&s, "Uno").await;
        let r2 = test_support::restaurant(&s, "Dos").await;
        let sec = test_support::section(&s, r1.id).await;
        let moved = s.sections
            .update(sec.id, UpdateSectionInput { restaurant_id: Some(r2.id), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(moved.restaurant.id, r2.id);
        assert_eq!(moved.name, sec.name);
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let r = test_support::restaurant(&s, "Casa").await;
        let sec = test_support::section(&s, r.id).await;
        assert_eq!(s.sections.update(sec.id, UpdateSectionInput::default()).await.unwrap(), sec);
        assert_eq!(s.sections.get(sec.id).await.unwrap(), sec);
    }
}
