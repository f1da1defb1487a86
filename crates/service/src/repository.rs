use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Anything stored under a UUID primary key.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable type name used in NotFound messages.
    const NAME: &'static str;
    fn id(&self) -> Uuid;
}

/// Persistence abstraction, one instance per entity type.
///
/// Implementations return resolved domain objects and propagate storage failures
/// as `ServiceError::Repository`.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, ServiceError>;
    async fn find_all(&self, page: PageRequest) -> Result<Vec<T>, ServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn create(&self, entity: T) -> Result<T, ServiceError>;
    async fn update(&self, entity: T) -> Result<T, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}

pub type Repo<T> = Arc<dyn Repository<T>>;

/// Fetch by id or fail with NotFound naming the entity type and id.
pub async fn find_required<T: Entity>(repo: &dyn Repository<T>, id: Uuid) -> Result<T, ServiceError> {
    repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found(T::NAME, id))
}

/// Existence check followed by delete; a missing row is NotFound and nothing is removed.
pub async fn delete_existing<T: Entity>(repo: &dyn Repository<T>, id: Uuid) -> Result<(), ServiceError> {
    if !repo.exists(id).await? {
        return Err(ServiceError::not_found(T::NAME, id));
    }
    repo.delete(id).await
}
