//! Co-purchase network server - REST API over the bundled product graph.

use clap::Parser;
use copurchase_server::{build_app, load_bundled_graph, AppState, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Co-purchase network server - read-only graph queries for the visualization client
#[derive(Parser, Debug)]
#[command(name = "copurchase-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (default: ./copurchase.toml if present)
    #[arg(short, long, env = "COPURCHASE_CONFIG")]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting co-purchase network server...");

    // The graph must be fully loaded before the listener is bound.
    let store = load_bundled_graph().inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load co-purchase dataset");
    })?;
    let state = Arc::new(AppState::new(store));

    let app = build_app(state, &config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "Co-purchase API listening on http://{}{}",
        addr,
        config.api_prefix
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
