//! Aggregated portfolio endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use omnifolio_common::error::AppError;
use omnifolio_common::types::TokenBalance;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/portfolio", get(portfolio))
}

/// GET /portfolio fans out over every tracked (wallet, chain) pair and
/// returns the merged holdings.
///
/// Always 200: per-pair failures are swallowed inside the aggregator, so a
/// fully unreachable vendor produces an empty array, not an error.
async fn portfolio(State(state): State<AppState>) -> Result<Json<Vec<TokenBalance>>, AppError> {
    let holdings = state.aggregator.aggregate().await;
    tracing::info!(entries = holdings.len(), "Portfolio aggregated");
    Ok(Json(holdings))
}
