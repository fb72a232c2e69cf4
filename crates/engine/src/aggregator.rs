//! Portfolio aggregator, the heart of the service.
//!
//! For N tracked wallets and M supported chains the aggregator issues exactly
//! N×M independent upstream fetches, all in flight at once:
//!
//! 1. Build the (wallet, chain) cross product, wallet-major.
//! 2. Fetch and normalize every pair concurrently.
//! 3. A failed pair is logged with its chain/wallet context and contributes
//!    an empty slice; it never aborts the remaining pairs.
//! 4. Flatten in cross-product order, then drop non-positive balances.
//!
//! `aggregate` cannot fail: a fully unreachable vendor yields an empty
//! portfolio rather than an error.

use futures::future::join_all;

use omnifolio_common::types::TokenBalance;
use omnifolio_moralis::client::MoralisClient;
use omnifolio_moralis::normalize::normalize;

/// Fans one upstream request out per tracked (wallet, chain) pair and joins
/// the outcomes into a single ordered portfolio.
///
/// Holds only read-only configuration and a cloneable client handle, so one
/// instance is shared by all concurrent requests.
#[derive(Debug, Clone)]
pub struct PortfolioAggregator {
    client: MoralisClient,
    wallets: Vec<String>,
    chains: Vec<String>,
}

impl PortfolioAggregator {
    pub fn new(client: MoralisClient, wallets: Vec<String>, chains: Vec<String>) -> Self {
        Self {
            client,
            wallets,
            chains,
        }
    }

    /// Run the full fan-out and return the filtered, ordered portfolio.
    ///
    /// Output is wallet-major, chain-minor in the configured order, keeping
    /// only entries with `balance > 0`. NaN balances (from unparseable vendor
    /// numerics) fail that comparison and drop out here.
    pub async fn aggregate(&self) -> Vec<TokenBalance> {
        tracing::debug!(
            wallets = self.wallets.len(),
            chains = self.chains.len(),
            "Portfolio fan-out started"
        );

        let fetches = self.wallets.iter().flat_map(|wallet| {
            self.chains
                .iter()
                .map(move |chain| self.fetch_pair(chain, wallet))
        });

        let outcomes = join_all(fetches).await;

        outcomes
            .into_iter()
            .flatten()
            .filter(|token| token.balance > 0.0)
            .collect()
    }

    /// Fetch and normalize a single pair, mapping any failure to an empty
    /// contribution. This is the pair boundary: no error crosses it.
    async fn fetch_pair(&self, chain: &str, wallet: &str) -> Vec<TokenBalance> {
        match self.client.wallet_tokens(chain, wallet).await {
            Ok(tokens) => tokens
                .iter()
                .map(|token| normalize(chain, wallet, token))
                .collect(),
            Err(e) => {
                tracing::warn!(
                    chain = %chain,
                    wallet = %wallet,
                    error = %e,
                    "Balance fetch failed, pair contributes no entries"
                );
                Vec::new()
            }
        }
    }
}
