//! Post repository
//!
//! Listing pipeline: project (message, timestamp) -> sort by timestamp
//! descending -> skip `offset` -> take `limit`. The id is only used as a
//! tie-break so equal timestamps keep a stable order.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::db::Storage;
use crate::models::{Created, Pagination, Post};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("storage unavailable")]
    Unavailable,
}

/// Storage seam used by [`PostRepo`] and the health routes.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Liveness check against the backing store.
    async fn ping(&self) -> Result<(), DbError>;

    /// Posts in the given window, most recent first.
    async fn list(&self, page: Pagination) -> Result<Vec<Post>, DbError>;

    /// Persist a post, returning its storage identifier.
    async fn insert(&self, post: &Post) -> Result<Uuid, DbError>;
}

/// Listing projection, no id column
#[derive(Debug, FromRow)]
struct PostRow {
    message: String,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            message: row.message,
            timestamp: row.created_at,
        }
    }
}

/// PostgreSQL-backed post store
#[derive(Debug, Clone)]
pub struct PgPostStore {
    storage: Storage,
}

impl PgPostStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn ping(&self) -> Result<(), DbError> {
        self.storage.ping().await?;
        Ok(())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Post>, DbError> {
        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
            SELECT message, created_at
            FROM posts
            ORDER BY created_at DESC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.storage.pool())
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn insert(&self, post: &Post) -> Result<Uuid, DbError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO posts (message, created_at)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&post.message)
        .bind(post.timestamp)
        .fetch_one(self.storage.pool())
        .await?;

        Ok(id)
    }
}

/// Post repository
pub struct PostRepo<'a> {
    store: &'a dyn PostStore,
}

impl<'a> PostRepo<'a> {
    pub fn new(store: &'a dyn PostStore) -> Self {
        Self { store }
    }

    /// List posts, most recent first.
    ///
    /// An empty window is an empty vec, not an error.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Post>, DbError> {
        self.store.list(page).await
    }

    /// Store a message stamped with the current server time.
    pub async fn create(&self, message: String) -> Result<Created, DbError> {
        let post = Post::stamped(message);
        let inserted_id = self.store.insert(&post).await?;

        tracing::debug!(%inserted_id, timestamp = %post.timestamp, "post created");
        Ok(Created { inserted_id })
    }
}
