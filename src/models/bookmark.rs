use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::sanitize::sanitize_text;

/// A stored bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

/// A validated bookmark that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

impl NewBookmark {
    pub fn with_id(self, id: String) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            description: self.description,
            rating: self.rating,
        }
    }
}

/// Raw body of `POST /bookmarks`. Fields are left untyped so that missing
/// and wrong-typed values reach validation instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: Option<Value>,
    pub url: Option<Value>,
    pub rating: Option<Value>,
    pub description: Option<Value>,
}

/// Raw body of `PATCH /bookmarks/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookmarkRequest {
    pub description: Option<Value>,
}

/// Client-facing representation of a bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.clone(),
            title: sanitize_text(&bookmark.title),
            url: bookmark.url.clone(),
            description: sanitize_text(&bookmark.description),
            rating: bookmark.rating,
        }
    }
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self::from(&bookmark)
    }
}
