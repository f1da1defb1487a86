//! Dining tables. A table's restaurant is always its section's restaurant.
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{DiningTable, Image, Section};
use crate::errors::ServiceError;
use crate::images::{patch_image, resolve_image};
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};
use crate::serde_ext::{optional_id, patch_id};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateTableInput {
    pub section_id: Uuid,
    #[validate(range(min = 1))]
    pub table_number: i32,
    #[validate(range(min = 1))]
    pub capacity: i32,
    pub position_x: i32,
    pub position_y: i32,
    #[validate(range(min = 1))]
    pub width: i32,
    #[validate(range(min = 1))]
    pub height: i32,
    #[serde(default, deserialize_with = "optional_id")]
    pub image_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableInput {
    pub section_id: Option<Uuid>,
    #[validate(range(min = 1))]
    pub table_number: Option<i32>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    pub position_x: Option<i32>,
    pub position_y: Option<i32>,
    #[validate(range(min = 1))]
    pub width: Option<i32>,
    #[validate(range(min = 1))]
    pub height: Option<i32>,
    /// Omit to keep, `null` to clear.
    #[serde(default, deserialize_with = "patch_id", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Uuid))]
    pub image_id: Option<Option<Uuid>>,
}

pub struct TableService {
    tables: Repo<DiningTable>,
    sections: Repo<Section>,
    images: Repo<Image>,
}

impl TableService {
    pub fn new(tables: Repo<DiningTable>, sections: Repo<Section>, images: Repo<Image>) -> Self {
        Self { tables, sections, images }
    }

    pub async fn list(&self, page: Pagination) -> Result<Vec<DiningTable>, ServiceError> {
        self.tables.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<DiningTable, ServiceError> {
        find_required(self.tables.as_ref(), id).await
    }

    #[instrument(skip_all, fields(section_id = %input.section_id))]
    pub async fn create(&self, input: CreateTableInput) -> Result<DiningTable, ServiceError> {
        let section = find_required(self.sections.as_ref(), input.section_id).await?;
        let image = resolve_image(self.images.as_ref(), input.image_id).await?;
        let table = DiningTable {
            id: Uuid::new_v4(),
            section,
            table_number: input.table_number,
            capacity: input.capacity,
            position_x: input.position_x,
            position_y: input.position_y,
            width: input.width,
            height: input.height,
            image,
        };
        let table = self.tables.create(table).await?;
        info!(table_id = %table.id, restaurant_id = %table.restaurant().id, "table_created");
        Ok(table)
    }

    /// A new section may belong to a different restaurant; reservations already
    /// pointing at this table are not re-checked.
    #[instrument(skip(self, input), fields(table_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateTableInput) -> Result<DiningTable, ServiceError> {
        let existing = self.get(id).await?;
        let section = match input.section_id {
            Some(sid) => find_required(self.sections.as_ref(), sid).await?,
            None => existing.section.clone(),
        };
        let image = patch_image(self.images.as_ref(), existing.image.clone(), input.image_id).await?;
        let updated = DiningTable {
            section,
            table_number: input.table_number.unwrap_or(existing.table_number),
            capacity: input.capacity.unwrap_or(existing.capacity),
            position_x: input.position_x.unwrap_or(existing.position_x),
            position_y: input.position_y.unwrap_or(existing.position_y),
            width: input.width.unwrap_or(existing.width),
            height: input.height.unwrap_or(existing.height),
            image,
            ..existing
        };
        let updated = self.tables.update(updated).await?;
        info!(table_id = %updated.id, "table_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(table_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.tables.as_ref(), id).await?;
        info!(table_id = %id, "table_deleted");
        Ok(())
    }
}
