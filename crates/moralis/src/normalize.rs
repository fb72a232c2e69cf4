//! Pure mapping from raw vendor token records to the service's output shape.

use omnifolio_common::types::TokenBalance;

use crate::models::VendorTokenBalance;

/// Coerce a vendor string field to a number, mirroring the loose semantics
/// the vendor's string-typed numerics rely on: empty input coerces to 0,
/// non-numeric input coerces to NaN. Never panics. NaN propagates into the
/// output record, where a NaN balance fails the `> 0` portfolio filter.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Map one vendor token record into a [`TokenBalance`] for the given pair.
///
/// `balance` prefers the vendor's pre-formatted decimal string; when that is
/// absent it falls back to raw balance / 10^decimals. Absent decimals default
/// to 0, a precision quirk of the vendor shape that is kept, not corrected.
/// A record with neither balance field yields NaN.
pub fn normalize(chain: &str, wallet: &str, token: &VendorTokenBalance) -> TokenBalance {
    let balance = match &token.balance_formatted {
        Some(formatted) => coerce_number(formatted),
        None => {
            let raw = token.balance.as_deref().map_or(f64::NAN, coerce_number);
            raw / 10f64.powi(token.decimals.unwrap_or(0) as i32)
        }
    };

    TokenBalance {
        chain: chain.to_string(),
        wallet: wallet.to_string(),
        symbol: token.symbol.clone().unwrap_or_default(),
        name: token.name.clone().unwrap_or_default(),
        balance,
        usd_value: token.usd_value.unwrap_or(0.0),
        price: token.usd_price,
    }
}
