//! `Pulseboard` - backend for a small personal dashboard
//!
//! Aggregates three public feeds (weather, exchange rates, quotations)
//! behind one JSON API and serves the prebuilt web client next to it.

pub mod api;
pub mod config;
pub mod error;
pub mod feeds;
pub mod models;
pub mod web;

// Re-export the types callers and tests touch most
pub use api::AppState;
pub use config::AppConfig;
pub use error::FeedError;
pub use models::{ExchangeRateSet, Quotation, WeatherReading};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
