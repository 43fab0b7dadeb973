//! Storage accessor - owns the PostgreSQL pool lifecycle
//!
//! `open` fails fast on an empty, malformed or unreachable connection
//! string. `ping` is used both at startup and by `GET /ping_db`.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors raised while opening storage
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("connection string is empty")]
    MissingUrl,

    #[error("invalid connection string: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("failed to connect: {0}")]
    Connect(#[source] sqlx::Error),
}

/// Handle on the backing PostgreSQL database.
///
/// Cloning is cheap; all clones share one pool.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: PgPool,
}

impl Storage {
    /// Open storage with the default pool size.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let storage = Storage::open("postgres://localhost/postboard").await?;
    /// storage.ping().await?;
    /// ```
    pub async fn open(database_url: &str) -> Result<Self, StorageError> {
        Self::open_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Open storage with a custom pool size.
    pub async fn open_with_options(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, StorageError> {
        let options = parse_url(database_url)?;

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(StorageError::Connect)?;

        Ok(Self { pool })
    }

    /// Lightweight liveness check against the database.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection. Pending acquires fail afterwards.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

fn parse_url(database_url: &str) -> Result<PgConnectOptions, StorageError> {
    let url = database_url.trim();
    if url.is_empty() {
        return Err(StorageError::MissingUrl);
    }
    url.parse::<PgConnectOptions>()
        .map_err(StorageError::InvalidUrl)
}
