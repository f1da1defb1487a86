use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Image, LayoutObject};
use crate::errors::ServiceError;
use crate::images::{patch_image, resolve_image};
use crate::pagination::Pagination;
use crate::repository::{delete_existing, find_required, Repo};
use crate::serde_ext::{optional_id, patch_id};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateLayoutObjectInput {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub object_type: Option<String>,
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
pub struct UpdateLayoutObjectInput {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 50))]
    pub object_type: Option<String>,
    pub position_x: Option<i32>,
    pub position_y: Option<i32>,
    #[validate(range(min = 1))]
    pub width: Option<i32>,
    #[validate(range(min = 1))]
    pub height: Option<i32>,
    #[serde(default, deserialize_with = "patch_id", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Uuid))]
    pub image_id: Option<Option<Uuid>>,
}

/// Layout objects only check their image; section placement is never written here.
pub struct LayoutObjectService {
    objects: Repo<LayoutObject>,
    images: Repo<Image>,
}

impl LayoutObjectService {
    pub fn new(objects: Repo<LayoutObject>, images: Repo<Image>) -> Self { Self { objects, images } }

    pub async fn list(&self, page: Pagination) -> Result<Vec<LayoutObject>, ServiceError> {
        self.objects.find_all(page.normalize()).await
    }

    pub async fn get(&self, id: Uuid) -> Result<LayoutObject, ServiceError> {
        find_required(self.objects.as_ref(), id).await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: CreateLayoutObjectInput) -> Result<LayoutObject, ServiceError> {
        let image = resolve_image(self.images.as_ref(), input.image_id).await?;
        let object = LayoutObject {
            id: Uuid::new_v4(),
            name: input.name,
            object_type: input.object_type,
            position_x: input.position_x,
            position_y: input.position_y,
            width: input.width,
            height: input.height,
            image,
            section_ids: Vec::new(),
        };
        let object = self.objects.create(object).await?;
        info!(layout_object_id = %object.id, "layout_object_created");
        Ok(object)
    }

    #[instrument(skip(self, input), fields(layout_object_id = %id))]
    pub async fn update(&self, id: Uuid, input: UpdateLayoutObjectInput) -> Result<LayoutObject, ServiceError> {
        let existing = self.get(id).await?;
        let image = patch_image(self.images.as_ref(), existing.image.clone(), input.image_id).await?;
        let updated = LayoutObject {
            name: input.name.or(existing.name),
            object_type: input.object_type.or(existing.object_type),
            position_x: input.position_x.unwrap_or(existing.position_x),
            position_y: input.position_y.unwrap_or(existing.position_y),
            width: input.width.unwrap_or(existing.width),
            height: input.height.unwrap_or(existing.height),
            image,
            ..existing
        };
        let updated = self.objects.update(updated).await?;
        info!(layout_object_id = %updated.id, "layout_object_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(layout_object_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        delete_existing(self.objects.as_ref(), id).await?;
        info!(layout_object_id = %id, "layout_object_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn input() -> CreateLayoutObjectInput {
        CreateLayoutObjectInput {
            name: Some("Barra".into()),
            object_type: Some("BAR".into()),
            position_x: 0,
            position_y: 10,
            width: 200,
            height: 40,
            image_id: None,
        }
    }

    #[tokio::test]
    async fn create_starts_unplaced_and_roundtrips() {
        let s = test_support::services();
        let o = s.layout_objects.create(input()).await.unwrap();
        assert!(o.section_ids.is_empty());
        assert_eq!(s.layout_objects.get(o.id).await.unwrap(), o);
    }

    #[tokio::test]
    async fn patch_keeps_image_and_changes_geometry() {
        let s = test_support::services();
        let img = test_support::image(&s).await;
        let o = s.layout_objects.create(CreateLayoutObjectInput { image_id: Some(img.id), ..input() }).await.unwrap();
        let moved = s.layout_objects
            .update(o.id, UpdateLayoutObjectInput { position_x: Some(50), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(moved.position_x, 50);
        assert_eq!(moved.image.map(|i| i.id), Some(img.id));
    }

    #[test]
    fn type_field_uses_its_wire_name() {
        let v: CreateLayoutObjectInput =
            serde_json::from_str(r#"{"type":"PLANT","positionX":1,"positionY":2,"width":3,"height":4}"#).unwrap();
        assert_eq!(v.object_type.as_deref(), Some("PLANT"));
        assert!(v.image_id.is_none());
    }

    #[tokio::test]
    async fn empty_patch_changes_nothing() {
        let s = test_support::services();
        let img = test_support::image(&s).await;
        let o = s.layout_objects.create(CreateLayoutObjectInput { image_id: Some(img.id), ..input() }).await.unwrap();
        assert_eq!(s.layout_objects.update(o.id, UpdateLayoutObjectInput::default()).await.unwrap(), o);
        assert_eq!(s.layout_objects.get(o.id).await.unwrap(), o);
    }
}
