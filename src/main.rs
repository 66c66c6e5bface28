//! SSR render server.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌────────────────────────────────────────────────────┐
//!                        │                   RENDER SERVER                    │
//!                        │                                                    │
//!     Browser Request    │  ┌─────────┐    ┌──────────┐    ┌──────────────┐   │
//!     ───────────────────┼─▶│  http   │───▶│ routing  │───▶│    loader    │───┼───▶ Upstream
//!                        │  │ server  │    │  table   │    │  (upstream)  │◀──┼──── JSON API
//!                        │  └────┬────┘    └──────────┘    └──────┬───────┘   │
//!                        │       │ /public                        ▼           │
//!                        │       ▼                         ┌──────────────┐   │
//!                        │  ┌─────────┐                    │ pages + view │   │
//!                        │  │ServeDir │                    │  to string   │   │
//!                        │  └─────────┘                    └──────┬───────┘   │
//!     HTML document      │                                        ▼           │
//!     ◀──────────────────┼──────────────────────────────── document shell     │
//!                        │                                  + hydration state │
//!                        └────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use ssr_server::config::{load_config, ServerConfig};
use ssr_server::lifecycle::{build_server, Shutdown};
use ssr_server::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "ssr-server")]
#[command(about = "Server-side rendering with route-based data prefetching", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("ssr-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config = ?cli.config,
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.items_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let bind_address = config.listener.bind_address.clone();
    let server = build_server(config)?;

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
