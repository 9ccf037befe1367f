//! HTTP server command
//!
//! Opens (or creates) the database, creates missing tables and serves the
//! API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::{create_pool, schema};
use todoctl_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args.database.database_url;
    tracing::info!("Starting todoctl server on {}", args.bind);
    tracing::info!("Database: {}", database_url);

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database {}", database_url))?;

    schema::run(&pool)
        .await
        .context("Failed to create tables")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        timeout: Duration::from_secs(args.timeout),
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
