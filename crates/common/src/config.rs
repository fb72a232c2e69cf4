use serde::Deserialize;

/// Moralis REST API base, version-pinned. Overridable via `MORALIS_BASE_URL`
/// so tests can point the client at a local mock server.
const DEFAULT_MORALIS_BASE_URL: &str = "https://deep-index.moralis.io/api/v2.2";

/// Wallets the portfolio aggregator tracks, in output order.
const TRACKED_WALLETS: [&str; 2] = [
    "0x47C7c4E3b59D2C03E98bf54C104e7481474842E5",
    "0x980F71B0D813d6cC81a248e39964c8D1a7BE01E5",
];

/// Chains queried for every tracked wallet, in output order.
const SUPPORTED_CHAINS: [&str; 7] = [
    "eth",
    "bsc",
    "polygon",
    "avax",
    "fantom",
    "arbitrum",
    "optimism",
];

/// Global application configuration loaded from environment variables.
///
/// Built once at process start and shared read-only afterwards; nothing
/// re-reads the environment per request.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listen port (default: 3000)
    pub port: u16,

    /// Moralis API key. Deliberately not validated at startup: a missing key
    /// surfaces as per-request upstream auth failures, and `/health` reports
    /// whether one is set.
    pub moralis_api_key: Option<String>,

    /// Moralis API base URL
    pub moralis_base_url: String,

    /// Wallet addresses aggregated by `/portfolio`
    pub tracked_wallets: Vec<String>,

    /// Chain identifiers queried for each tracked wallet
    pub supported_chains: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid u16"))?,
            moralis_api_key: std::env::var("MORALIS_API").ok(),
            moralis_base_url: std::env::var("MORALIS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MORALIS_BASE_URL.to_string()),
            tracked_wallets: TRACKED_WALLETS.iter().map(|w| w.to_string()).collect(),
            supported_chains: SUPPORTED_CHAINS.iter().map(|c| c.to_string()).collect(),
        })
    }

    /// First six characters of the API key plus an ellipsis, or `None` when
    /// the key is unset. Lets `/health` confirm configuration without leaking
    /// the secret.
    pub fn api_key_prefix(&self) -> Option<String> {
        self.moralis_api_key
            .as_ref()
            .map(|key| format!("{}...", key.chars().take(6).collect::<String>()))
    }
}
