use crate::error::Result;
use crate::models::bookmark::Bookmark;
use async_trait::async_trait;
use dashmap::DashMap;

/// Backing store for bookmarks.
///
/// Implementations trust their input: validation happens before a record
/// reaches the store. Each operation touches a single record and is atomic.
#[async_trait]
pub trait BookmarkStore: Send + Sync + 'static {
    /// Returns every stored bookmark.
    async fn list_all(&self) -> Result<Vec<Bookmark>>;

    /// Returns `None` if no bookmark has the given id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>>;

    /// Persists a bookmark whose id has already been assigned.
    async fn insert(&self, bookmark: Bookmark) -> Result<Bookmark>;

    /// Replaces the description. Returns `None` if no bookmark has the given id.
    async fn update_description(&self, id: &str, description: &str) -> Result<Option<Bookmark>>;

    /// Returns `true` if the bookmark existed and was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool>;
}

/// In-memory store backed by a `DashMap`. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    bookmarks: DashMap<String, Bookmark>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>> {
        Ok(self
            .bookmarks
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>> {
        Ok(self.bookmarks.get(id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, bookmark: Bookmark) -> Result<Bookmark> {
        self.bookmarks.insert(bookmark.id.clone(), bookmark.clone());
        Ok(bookmark)
    }

    async fn update_description(&self, id: &str, description: &str) -> Result<Option<Bookmark>> {
        Ok(self.bookmarks.get_mut(id).map(|mut entry| {
            entry.description = description.to_string();
            entry.value().clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        Ok(self.bookmarks.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: &str) -> Bookmark {
        Bookmark {
            id: id.to_string(),
            title: format!("title {}", id),
            url: "https://example.com".to_string(),
            description: "description".to_string(),
            rating: 2,
        }
    }

    #[tokio::test]
    async fn insert_and_get() {
        let store = InMemoryStore::new();
        store.insert(bookmark("a")).await.unwrap();

        let found = store.get_by_id("a").await.unwrap().unwrap();
        assert_eq!(found, bookmark("a"));
        assert!(store.get_by_id("b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_all_returns_every_record() {
        let store = InMemoryStore::new();
        assert!(store.list_all().await.unwrap().is_empty());

        store.insert(bookmark("a")).await.unwrap();
        store.insert(bookmark("b")).await.unwrap();

        let mut ids: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn update_description_only() {
        let store = InMemoryStore::new();
        store.insert(bookmark("a")).await.unwrap();

        let updated = store.update_description("a", "changed").await.unwrap().unwrap();
        assert_eq!(updated.description, "changed");
        assert_eq!(updated.title, "title a");
        assert_eq!(updated.rating, 2);

        assert!(store.update_description("missing", "x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryStore::new();
        store.insert(bookmark("a")).await.unwrap();

        assert!(store.delete_by_id("a").await.unwrap());
        assert!(!store.delete_by_id("a").await.unwrap());
        assert!(store.get_by_id("a").await.unwrap().is_none());
    }
}
