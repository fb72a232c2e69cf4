//! Omnifolio API server library: route tree and shared state.

pub mod routes;
pub mod state;
