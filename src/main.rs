//! House projects service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request       ┌──────────────────────────────────────────────┐
//!     ─────────────────────┼─▶ http::server ──▶ http::handlers            │
//!                          │   (middleware)          │                    │
//!                          │                         ▼                    │
//!     Client Response      │   http::response ◀── store::ProjectStore     │
//!     ◀────────────────────┼── (status + JSON)    (InMemoryProjectStore)  │
//!                          │                                              │
//!                          │   config · observability · lifecycle         │
//!                          └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use house_projects::config::{load_config, validation::validate_config, ServiceConfig};
use house_projects::lifecycle::{wait_for_termination, Shutdown};
use house_projects::observability::init_logging;
use house_projects::HttpServer;

#[derive(Parser)]
#[command(name = "house-projects")]
#[command(about = "CRUD API for house project records", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(house_projects::config::ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!("house-projects v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        seed_projects = config.projects.len(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_termination().await;
        signal_shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
