//! Portfolio aggregation engine: the wallet × chain fan-out over the vendor
//! balance API.

pub mod aggregator;
