use crate::{
    error::Result,
    models::bookmark::{Bookmark, NewBookmark},
    services::store::BookmarkStore,
};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Storage gateway for bookmarks. Callers hand it validated input only.
#[derive(Clone)]
pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Bookmark>> {
        let bookmarks = self.store.list_all().await?;
        debug!("Listed {} bookmarks", bookmarks.len());
        Ok(bookmarks)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>> {
        self.store.get_by_id(id).await
    }

    /// Assigns a fresh id to the candidate and persists it.
    pub async fn insert(&self, candidate: NewBookmark) -> Result<Bookmark> {
        let bookmark = candidate.with_id(Uuid::new_v4().to_string());
        let created = self.store.insert(bookmark).await?;

        info!("Bookmark with id {} created", created.id);
        Ok(created)
    }

    pub async fn update_description(&self, id: &str, description: String) -> Result<Option<Bookmark>> {
        let updated = self.store.update_description(id, &description).await?;

        if updated.is_some() {
            info!("Bookmark with id {} updated", id);
        }
        Ok(updated)
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let deleted = self.store.delete_by_id(id).await?;

        if deleted {
            info!("Bookmark with id {} deleted", id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::InMemoryStore;

    fn service() -> BookmarkService {
        BookmarkService::new(Arc::new(InMemoryStore::new()))
    }

    fn candidate() -> NewBookmark {
        NewBookmark {
            title: "A".to_string(),
            url: "https://example.com".to_string(),
            description: "d".to_string(),
            rating: 3,
        }
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let service = service();

        let first = service.insert(candidate()).await.unwrap();
        let second = service.insert(candidate()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn insert_returns_stored_record() {
        let service = service();

        let created = service.insert(candidate()).await.unwrap();
        let fetched = service.get_by_id(&created.id).await.unwrap().unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.title, "A");
        assert_eq!(fetched.rating, 3);
    }

    #[tokio::test]
    async fn update_then_delete() {
        let service = service();
        let created = service.insert(candidate()).await.unwrap();

        let updated = service
            .update_description(&created.id, "changed".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.description, "changed");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.url, created.url);

        assert!(service.delete_by_id(&created.id).await.unwrap());
        assert!(!service.delete_by_id(&created.id).await.unwrap());
        assert!(service.get_by_id(&created.id).await.unwrap().is_none());
    }
}
