//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (any origin)
//! - `[ip]:port status - method path` access log
//! - Graceful shutdown
//! - JSON envelope error responses

pub mod access_log;
pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{
    greeting_app, post_app, run_greeter, run_server, AppState, ServerConfig, ServerError,
};
