//! Process-local repository used by tests and the `memory` storage backend.
//!
//! Rows keep insertion order. A row stores its parents as written; when the
//! repository is built `with_links`, every read re-resolves those parents
//! through their own repositories so edits to a parent show up in its children.
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::pagination::PageRequest;
use crate::repository::{Entity, Repository};

use super::links::Relink;

pub struct InMemoryRepository<T> {
    rows: RwLock<Vec<T>>,
    links: Option<Arc<dyn Relink<T>>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self { Self { rows: RwLock::new(Vec::new()), links: None } }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self { Self::default() }

    pub fn with_links(links: impl Relink<T> + 'static) -> Self {
        Self { rows: RwLock::new(Vec::new()), links: Some(Arc::new(links)) }
    }

    async fn relink(&self, row: T) -> Result<T, ServiceError> {
        match &self.links {
            Some(links) => links.relink(row).await,
            None => Ok(row),
        }
    }

    pub async fn len(&self) -> usize { self.rows.read().await.len() }

    pub async fn is_empty(&self) -> bool { self.rows.read().await.is_empty() }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, ServiceError> {
        let found = self.rows.read().await.iter().find(|r| r.id() == id).cloned();
        match found {
            Some(row) => self.relink(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_all(&self, page: PageRequest) -> Result<Vec<T>, ServiceError> {
        let skip = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit).unwrap_or(usize::MAX);
        let window: Vec<T> = self.rows.read().await.iter().skip(skip).take(take).cloned().collect();
        let mut out = Vec::with_capacity(window.len());
        for row in window {
            out.push(self.relink(row).await?);
        }
        Ok(out)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().any(|r| r.id() == id))
    }

    async fn create(&self, entity: T) -> Result<T, ServiceError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id() == entity.id()) {
            return Err(ServiceError::Repository(format!("duplicate {} id {}", T::NAME, entity.id())));
        }
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, ServiceError> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(ServiceError::Repository(format!("{} {} vanished before update", T::NAME, entity.id()))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let mut rows = self.rows.write().await;
        rows.retain(|r| r.id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row { id: Uuid, n: u32 }

    impl Entity for Row {
        const NAME: &'static str = "Row";
        fn id(&self) -> Uuid { self.id }
    }

    #[tokio::test]
    async fn keeps_insertion_order_and_pages() {
        let repo = InMemoryRepository::<Row>::new();
        for n in 0..5 {
            repo.create(Row { id: Uuid::new_v4(), n }).await.unwrap();
        }
        let page = repo.find_all(PageRequest { offset: 1, limit: 2 }).await.unwrap();
        assert_eq!(page.iter().map(|r| r.n).collect::<Vec<_>>(), vec![1, 2]);
        let tail = repo.find_all(PageRequest { offset: 4, limit: 10 }).await.unwrap();
        assert_eq!(tail.len(), 1);
        assert!(repo.find_all(PageRequest { offset: 9, limit: 10 }).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_delete_removes() {
        let repo = InMemoryRepository::<Row>::new();
        let id = Uuid::new_v4();
        repo.create(Row { id, n: 1 }).await.unwrap();
        repo.update(Row { id, n: 2 }).await.unwrap();
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().n, 2);
        repo.delete(id).await.unwrap();
        assert!(!repo.exists(id).await.unwrap());
        assert!(repo.is_empty().await);
    }

    struct Doubled;

    #[async_trait]
    impl Relink<Row> for Doubled {
        async fn relink(&self, mut row: Row) -> Result<Row, ServiceError> {
            row.n *= 2;
            Ok(row)
        }
    }

    #[tokio::test]
    async fn links_apply_on_every_read_but_not_to_stored_rows() {
        let repo = InMemoryRepository::<Row>::with_links(Doubled);
        let id = Uuid::new_v4();
        assert_eq!(repo.create(Row { id, n: 3 }).await.unwrap().n, 3);
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().n, 6);
        assert_eq!(repo.find_all(PageRequest::default()).await.unwrap()[0].n, 6);
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().n, 6);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_a_repository_error() {
        let repo = InMemoryRepository::<Row>::new();
        let err = repo.update(Row { id: Uuid::new_v4(), n: 0 }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repository(_)));
    }
}
