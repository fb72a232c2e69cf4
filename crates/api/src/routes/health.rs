//! Liveness and configuration health endpoints.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub has_api_key: bool,
    /// Masked key prefix ("abcdef..."), or null when no key is configured.
    pub api_key_prefix: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(live))
        .route("/health", get(health_check))
}

/// GET / returns the plain-text liveness banner.
async fn live() -> &'static str {
    "Omnifolio portfolio tracker is live 🚀"
}

/// GET /health confirms configuration without leaking the API key.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        has_api_key: state.config.moralis_api_key.is_some(),
        api_key_prefix: state.config.api_key_prefix(),
    })
}
