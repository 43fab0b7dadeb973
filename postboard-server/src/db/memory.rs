//! In-process post store
//!
//! Mirrors the PostgreSQL listing order so route and repository tests can
//! run without a database. `set_available(false)` simulates a severed
//! connection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::repos::{DbError, PostStore};
use crate::models::{Pagination, Post};

#[derive(Debug)]
struct Stored {
    id: Uuid,
    post: Post,
}

/// Post store backed by a vector
#[derive(Debug)]
pub struct MemoryPostStore {
    posts: Mutex<Vec<Stored>>,
    available: AtomicBool,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle whether every operation fails with [`DbError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored posts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), DbError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DbError::Unavailable)
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Stored>> {
        // Entries are pushed whole, so a poisoned vec is still consistent.
        self.posts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn ping(&self) -> Result<(), DbError> {
        self.check()
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Post>, DbError> {
        self.check()?;

        let mut rows: Vec<(Uuid, Post)> = self
            .lock()
            .iter()
            .map(|s| (s.id, s.post.clone()))
            .collect();
        rows.sort_by(|(a_id, a), (b_id, b)| {
            b.timestamp.cmp(&a.timestamp).then_with(|| a_id.cmp(b_id))
        });

        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(skip).take(take).map(|(_, p)| p).collect())
    }

    async fn insert(&self, post: &Post) -> Result<Uuid, DbError> {
        self.check()?;

        let id = Uuid::new_v4();
        self.lock().push(Stored {
            id,
            post: post.clone(),
        });
        Ok(id)
    }
}
