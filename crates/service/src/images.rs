//! Optional image references shared by restaurants, tables, dishes and layout objects.
use uuid::Uuid;

use crate::domain::Image;
use crate::errors::ServiceError;
use crate::repository::{find_required, Repository};

/// No id means no image; an id must resolve or the call fails with NotFound.
pub async fn resolve_image(images: &dyn Repository<Image>, image_id: Option<Uuid>) -> Result<Option<Image>, ServiceError> {
    match image_id {
        Some(id) => find_required(images, id).await.map(Some),
        None => Ok(None),
    }
}

/// Apply a three-state image patch: absent keeps `current`, `Some(None)` clears.
pub async fn patch_image(
    images: &dyn Repository<Image>,
    current: Option<Image>,
    patch: Option<Option<Uuid>>,
) -> Result<Option<Image>, ServiceError> {
    match patch {
        None => Ok(current),
        Some(id) => resolve_image(images, id).await,
    }
}
