//! Database layer - storage accessor, schema bootstrap and post store
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - One storage call per request, no retries
//! - Handlers see `dyn PostStore`, never the pool directly

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use memory::MemoryPostStore;
pub use pool::{Storage, StorageError};
pub use repos::*;
