use serde::Deserialize;

/// One page of the vendor's canonical wallet-token-balances endpoint
/// (`GET /wallets/{address}/tokens`).
#[derive(Debug, Clone, Deserialize)]
pub struct WalletTokensPage {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Token records for the requested (wallet, chain) pair.
    #[serde(default)]
    pub result: Vec<VendorTokenBalance>,
}

/// A raw vendor token record, as Moralis reports it.
///
/// Every field is lenient: the vendor omits fields freely and a missing value
/// must never fail decoding of the whole page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VendorTokenBalance {
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
    /// Raw integer balance as a decimal string.
    #[serde(default)]
    pub balance: Option<String>,
    /// Vendor-side decimal-adjusted balance as a string.
    #[serde(default)]
    pub balance_formatted: Option<String>,
    /// Per-token USD price.
    #[serde(default)]
    pub usd_price: Option<f64>,
    /// Total USD value of the holding.
    #[serde(default)]
    pub usd_value: Option<f64>,
    #[serde(default)]
    pub native_token: bool,
    #[serde(default)]
    pub possible_spam: bool,
}
