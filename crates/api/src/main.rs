//! Omnifolio API server binary entrypoint.

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use omnifolio_common::config::AppConfig;
use omnifolio_moralis::client::MoralisClient;

use omnifolio_api::routes::create_router;
use omnifolio_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("omnifolio_api=debug,omnifolio_engine=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting Omnifolio API server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // Vendor client. No eager key validation: /health reports key presence
    // and a missing key surfaces as per-request upstream auth failures.
    let client = MoralisClient::from_config(&config)?;
    tracing::info!(
        wallets = config.tracked_wallets.len(),
        chains = config.supported_chains.len(),
        has_api_key = config.moralis_api_key.is_some(),
        "Vendor client ready"
    );

    let port = config.port;

    // Build application state
    let state = AppState::new(client, config);

    // Build router
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
