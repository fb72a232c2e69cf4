//! Shared application state for the Axum API server.

use omnifolio_common::config::AppConfig;
use omnifolio_engine::aggregator::PortfolioAggregator;
use omnifolio_moralis::client::MoralisClient;

/// Application state shared across all route handlers via Axum `State`.
///
/// Everything here is read-only after startup; handlers never mutate state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: MoralisClient,
    pub aggregator: PortfolioAggregator,
}

impl AppState {
    /// Build the state from loaded configuration and a vendor client. The
    /// aggregator is constructed once here and shared by all requests.
    pub fn new(client: MoralisClient, config: AppConfig) -> Self {
        let aggregator = PortfolioAggregator::new(
            client.clone(),
            config.tracked_wallets.clone(),
            config.supported_chains.clone(),
        );
        Self {
            config,
            client,
            aggregator,
        }
    }
}
