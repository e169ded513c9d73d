//! Daily News API Server
//!
//! HTTP API server that serves daily news snapshots stored as JSON shards,
//! plus the static browser client.

mod config;
mod error;
mod middleware;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use news_services::{FsShardSource, NewsCalendar, NewsResolver, SystemClock};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Environment, ServerConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<NewsResolver>,
    pub config: Arc<ServerConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,news_api=debug,news_services=debug")),
        )
        .init();

    info!("Starting Daily News API");

    let config = ServerConfig::from_env()?;
    if !config.data_dir.is_dir() {
        warn!(
            "Data directory {} does not exist yet - requests will fail until it does",
            config.data_dir.display()
        );
    }
    if config.environment == Environment::Production {
        info!("Production mode: redirecting plain HTTP to HTTPS");
    }

    let resolver = NewsResolver::new(
        Arc::new(FsShardSource::new(&config.data_dir)),
        Arc::new(SystemClock),
        NewsCalendar::new(config.timezone),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Create app state
    let state = AppState {
        resolver: Arc::new(resolver),
        config: Arc::new(config),
    };

    let app = routes::app(state);

    info!("Server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
