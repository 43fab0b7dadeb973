//! Route handlers organized by resource

pub mod greeting;
pub mod health;
pub mod posts;
