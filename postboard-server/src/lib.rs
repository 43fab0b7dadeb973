//! postboard-server: HTTP server for greetings and the post resource
//!
//! Two router flavours share the same middleware stack:
//! - greeting router: `/` and `/{name}` static string responses
//! - post router: greeting root, health checks and the `/post` resource
//!   backed by a [`db::PostStore`]

pub mod db;
pub mod http;
pub mod models;

pub use db::{PostRepo, PostStore, Storage};
pub use http::{run_greeter, run_server, AppState, ServerConfig};
