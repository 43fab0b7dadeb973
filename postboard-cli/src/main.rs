use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::greet::{run_greet, GreetArgs};
use commands::serve::{run_serve, ServeArgs};

#[derive(Parser, Debug)]
#[command(name = "postboard", version, about = "Greeting and post HTTP servers")]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the database-backed server with health checks and the post resource
    Serve(ServeArgs),
    /// Run the greeting-only server (`/` and `/{name}`)
    Greet(GreetArgs),
}

fn init_tracing(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("Failed to install tracing subscriber: {}", err))
}

#[tokio::main]
async fn main() {
    // Missing .env is fine; the real environment still applies
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // No subscriber yet, so this one goes straight to stderr
    if let Err(err) = init_tracing(cli.debug) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::Greet(args) => run_greet(args).await,
    };

    if let Err(err) = result {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_tracing_init_is_reported() {
        let _ = init_tracing(false);

        let err = init_tracing(true).unwrap_err();
        assert!(err.to_string().contains("Failed to install tracing subscriber"));
    }
}
