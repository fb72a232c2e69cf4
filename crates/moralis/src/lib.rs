//! Moralis vendor integration: the authenticated balance client plus the
//! pure vendor-record to `TokenBalance` normalization.

pub mod client;
pub mod models;
pub mod normalize;
