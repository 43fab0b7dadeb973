//! Database-backed server command
//!
//! Opens storage, pings it, bootstraps the schema, then serves until
//! shutdown. Any startup failure aborts before the listener is bound.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use postboard_server::db::{migrations, PgPostStore, Storage};
use postboard_server::http::routes::greeting::DEFAULT_GREETING;
use postboard_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = postboard_server::db::pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Body returned by `GET /`
    #[arg(long, default_value = DEFAULT_GREETING)]
    pub greeting: String,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let storage = Storage::open_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to open database")?;

    storage
        .ping()
        .await
        .context("Database did not answer startup ping")?;
    tracing::info!("Connected to database");

    migrations::run(storage.pool())
        .await
        .context("Failed to prepare posts table")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        greeting: args.greeting,
    };

    tracing::info!("Starting post server on {}", config.bind_addr);
    let result = run_server(Arc::new(PgPostStore::new(storage.clone())), config).await;

    storage.close().await;
    tracing::info!("Database connections closed");

    result.context("Server error")
}
