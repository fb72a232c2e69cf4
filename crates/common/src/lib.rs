//! Shared foundation for Omnifolio: configuration, error taxonomy, and the
//! common output record used by every other crate in the workspace.

pub mod config;
pub mod error;
pub mod types;
