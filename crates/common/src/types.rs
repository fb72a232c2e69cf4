use serde::{Deserialize, Serialize};

/// A single normalized token holding for one (wallet, chain) pair.
///
/// The `/portfolio` endpoint returns a flat JSON array of these, camelCase on
/// the wire. Constructed fresh per request; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    /// Chain the balance was observed on (e.g. "eth", "bsc").
    pub chain: String,
    /// Wallet address holding the token.
    pub wallet: String,
    /// Token ticker symbol as reported by the vendor.
    pub symbol: String,
    /// Human-readable token name.
    pub name: String,
    /// Decimal-adjusted token quantity.
    pub balance: f64,
    /// Total USD value of the holding; 0 when the vendor omits it.
    pub usd_value: f64,
    /// Per-token USD price; omitted from the output when the vendor has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}
