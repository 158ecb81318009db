//! Leaderboard service entry point
//!
//! Starts the REST server over the feed client and the leaderboard engine.

use anyhow::{Context, Result};
use clap::Parser;
use feed_client::FeedClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use leaderboard_service::{initialize_logging, rest_api, ServiceConfig};

#[derive(Parser, Debug)]
#[command(name = "leaderboard-service", about = "Leaderboard aggregation REST service")]
struct Args {
    /// Bind address for the HTTP server
    #[arg(long)]
    host: Option<String>,

    /// Bind port for the HTTP server
    #[arg(long)]
    port: Option<u16>,

    /// Base URL of the upstream stats backend
    #[arg(long)]
    feed_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServiceConfig::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(base_url) = args.feed_base_url {
        config.feeds.base_url = base_url;
    }

    initialize_logging(&config.logging)?;

    info!("Starting Leaderboard Service v{}", env!("CARGO_PKG_VERSION"));
    info!("Upstream feeds at {}", config.feeds.base_url);

    let client =
        Arc::new(FeedClient::new(config.feeds.clone()).context("Failed to create feed client")?);

    let routes = rest_api::create_routes(client);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server bind address")?;

    info!("Leaderboard Service listening on http://{addr}");

    let (bound, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    });

    info!("Bound to {bound}");
    server.await;

    info!("Leaderboard Service shutdown complete");
    Ok(())
}
