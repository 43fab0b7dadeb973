//! Greeting-only server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use postboard_server::http::routes::greeting::DEFAULT_GREETING;
use postboard_server::http::{run_greeter, ServerConfig};

/// Arguments for the greet command
#[derive(Parser, Debug)]
pub struct GreetArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Body returned by `GET /`
    #[arg(long, default_value = DEFAULT_GREETING)]
    pub greeting: String,
}

/// Run the greeting server
pub async fn run_greet(args: GreetArgs) -> Result<()> {
    tracing::info!("Starting greeting server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        greeting: args.greeting,
    };

    run_greeter(config).await.context("Server error")
}
