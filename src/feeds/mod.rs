//! Upstream feed clients.
//!
//! One client per data domain. Each performs a single bounded call per
//! request and reshapes the provider's JSON into the stable models in
//! [`crate::models`]; no retries, no caching.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

pub mod currency;
pub mod quote;
pub mod weather;

/// Ceiling for any upstream call. The currency and quote clients apply
/// tighter per-request timeouts on top of this.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client shared by all three feeds.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(CLIENT_TIMEOUT)
        .user_agent("pulseboard/0.1.0")
        .build()
        .context("Failed to create HTTP client")
}
