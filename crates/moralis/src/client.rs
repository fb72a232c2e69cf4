//! HTTP client for the Moralis wallet-balances API.

use std::time::Duration;

use omnifolio_common::config::AppConfig;
use omnifolio_common::error::AppError;

use crate::models::{VendorTokenBalance, WalletTokensPage};

/// Outbound request timeout. Bounds how long one slow vendor call can hold
/// up a fan-out; the pair simply times out and contributes nothing.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Undecoded vendor reply, relayed verbatim by the `/debug` endpoint.
#[derive(Debug, Clone)]
pub struct RawVendorResponse {
    /// Whether the vendor answered 2xx.
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

/// Authenticated client for the Moralis REST API.
///
/// Cheap to clone: the inner `reqwest::Client` is a shared handle. The base
/// URL is injectable so tests can target a local mock server.
#[derive(Debug, Clone)]
pub struct MoralisClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl MoralisClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Self::new(&config.moralis_base_url, config.moralis_api_key.clone())
    }

    /// Fetch token balances for one (wallet, chain) pair from the canonical
    /// `wallets/{address}/tokens` endpoint.
    ///
    /// Returns the decoded vendor records on 2xx. A non-2xx reply becomes
    /// [`AppError::UpstreamStatus`] carrying the status and body text;
    /// network-level failures become [`AppError::Transport`].
    pub async fn wallet_tokens(
        &self,
        chain: &str,
        wallet: &str,
    ) -> Result<Vec<VendorTokenBalance>, AppError> {
        let url = format!("{}/wallets/{}/tokens", self.base_url, wallet);
        let response = self.vendor_get(&url, chain).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let page: WalletTokensPage = response.json().await?;
        Ok(page.result)
    }

    /// Raw call against the older `{address}/erc20` list endpoint. Nothing is
    /// decoded: the caller relays the vendor's body and status untouched.
    pub async fn erc20_raw(
        &self,
        chain: &str,
        wallet: &str,
    ) -> Result<RawVendorResponse, AppError> {
        let url = format!("{}/{}/erc20", self.base_url, wallet);
        let response = self.vendor_get(&url, chain).send().await?;

        let status = response.status();
        let body = response.text().await?;
        Ok(RawVendorResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    /// Build a vendor GET: JSON accept header, chain scope, and the API key
    /// when one is configured. With no key the header is omitted and the
    /// vendor's auth failure surfaces on the individual request.
    fn vendor_get(&self, url: &str, chain: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .get(url)
            .query(&[("chain", chain)])
            .header("accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("X-API-Key", key);
        }
        request
    }
}
