//! Binary crate for the weather activity advisor server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring configuration, the provider and the service together
//! - Serving the HTTP API and the landing page

use std::sync::Arc;

use advisor_core::{Config, WeatherService, provider};
use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod routes;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "advisor-server", version, about = "Weather activity advisor server")]
struct Args {
    /// Address to listen on, e.g. "127.0.0.1:8080". Overrides the config file.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Config::load()?;

    let provider = provider::provider_from_config(&config)?;
    let service = Arc::new(WeatherService::new(provider));

    let app = routes::router(service).layer(TraceLayer::new_for_http());

    let bind = args.bind.unwrap_or_else(|| config.bind_address.clone());
    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind to {bind}"))?;

    tracing::info!("listening on http://{bind}");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
