use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::bookmark::Bookmark;
use crate::services::store::BookmarkStore;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, error, info};

/// PostgreSQL backed bookmark store.
///
/// Expects a `bookmarks` table:
///
/// ```sql
/// CREATE TABLE bookmarks (
///     id          TEXT PRIMARY KEY,
///     title       TEXT NOT NULL,
///     url         TEXT NOT NULL,
///     description TEXT NOT NULL,
///     rating      INTEGER NOT NULL
/// );
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// 创建新的数据库连接池
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Initializing database connection pool");

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 验证数据库连接
    pub async fn verify_connection(&self) -> Result<()> {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => {
                info!("Database connection verified successfully");
                Ok(())
            }
            Err(e) => {
                error!("Failed to verify database connection: {}", e);
                Err(AppError::from(e))
            }
        }
    }
}

#[async_trait]
impl BookmarkStore for PostgresStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(
            "SELECT id, title, url, description, rating FROM bookmarks ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookmarks)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Bookmark>> {
        debug!("Selecting bookmark {}", id);

        let bookmark = sqlx::query_as::<_, Bookmark>(
            "SELECT id, title, url, description, rating FROM bookmarks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bookmark)
    }

    async fn insert(&self, bookmark: Bookmark) -> Result<Bookmark> {
        let created = sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (id, title, url, description, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, url, description, rating
            "#,
        )
        .bind(&bookmark.id)
        .bind(&bookmark.title)
        .bind(&bookmark.url)
        .bind(&bookmark.description)
        .bind(bookmark.rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_description(&self, id: &str, description: &str) -> Result<Option<Bookmark>> {
        let updated = sqlx::query_as::<_, Bookmark>(
            r#"
            UPDATE bookmarks SET description = $2
            WHERE id = $1
            RETURNING id, title, url, description, rating
            "#,
        )
        .bind(id)
        .bind(description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
