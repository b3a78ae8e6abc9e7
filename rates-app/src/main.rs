//! # Rates Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the cache adapter
//! - Create the CBR client and the rate service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_cache::build_cache;
use rates_cbr::CbrClient;
use rates_hex::{CurrencyRateService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_app=debug,rates_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting rates gateway on port {}", config.port);
    tracing::info!("Using cache: {}", config.cache_url);
    tracing::info!("Rate source: {}", config.cbr.service_url);

    // Build the cache adapter
    let cache = build_cache(&config.cache_url).await?;

    // Create the upstream client and the rate service
    let source = CbrClient::new(config.cbr)?;
    let service = CurrencyRateService::new(source, cache);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
