//! Raw vendor passthrough for diagnosing upstream responses.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;

use omnifolio_common::error::AppError;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DebugParams {
    wallet: Option<String>,
    chain: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/debug", get(debug_lookup))
}

/// GET /debug?wallet=0x...&chain=eth relays one vendor call untouched.
///
/// The vendor's body comes back byte-for-byte: a 2xx reply maps to 200,
/// anything else keeps the vendor's own status. Only transport failures
/// surface as a 500 error body.
async fn debug_lookup(
    State(state): State<AppState>,
    Query(params): Query<DebugParams>,
) -> Result<Response, AppError> {
    let wallet = params
        .wallet
        .ok_or_else(|| AppError::Validation("Provide ?wallet=0x...".to_string()))?;
    let chain = params.chain.unwrap_or_else(|| "eth".to_string());

    let raw = state.client.erc20_raw(&chain, &wallet).await?;
    let status = if raw.ok {
        StatusCode::OK
    } else {
        StatusCode::from_u16(raw.status).unwrap_or(StatusCode::BAD_GATEWAY)
    };
    Ok((status, raw.body).into_response())
}
