//! Post records and the create request body

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored post as returned by listings.
///
/// The storage identifier is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    /// Stamp a new post with the current time.
    pub fn stamped(message: String) -> Self {
        Self {
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Body of `POST /post`.
///
/// Any other field, including `timestamp`, is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub message: String,
}

/// Confirmation returned after a post is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Created {
    #[serde(rename = "InsertedID")]
    pub inserted_id: Uuid,
}
