//! Exchange-rate client backed by the open ER-API service.
//!
//! Rates are quoted against INR. Any failure here is recoverable: the
//! handler swaps in [`fallback_rates`] so the dashboard never loses its
//! currency panel.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::FeedError;
use crate::models::ExchangeRateSet;

const SERVICE: &str = "ER-API";
const DEFAULT_BASE_URL: &str = "https://open.er-api.com";
const BASE_CURRENCY: &str = "INR";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(7);

/// Tag carried by rate sets that did not come from the live feed.
pub const FALLBACK_SOURCE: &str = "Fallback data";

#[derive(Debug, Clone)]
pub struct CurrencyClient {
    http: Client,
    base_url: String,
}

impl CurrencyClient {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Fetch the latest INR-based rates for the dashboard's currencies.
    pub async fn latest(&self) -> Result<ExchangeRateSet, FeedError> {
        let url = format!("{}/v6/latest/{}", self.base_url, BASE_CURRENCY);
        debug!("ER-API request for base currency {}", BASE_CURRENCY);

        let response = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|source| FeedError::Transport {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
            return Err(FeedError::Status {
                service: SERVICE,
                status,
                body,
            });
        }

        let latest: erapi::LatestResponse =
            response.json().await.map_err(|err| FeedError::Malformed {
                service: SERVICE,
                detail: err.to_string(),
            })?;

        latest.into_rate_set()
    }
}

/// Rates served when the live feed is unreachable or unusable.
pub fn fallback_rates() -> ExchangeRateSet {
    ExchangeRateSet {
        base: BASE_CURRENCY.to_string(),
        usd: 0.012,
        eur: 0.011,
        gbp: 0.0095,
        jpy: 1.75,
        aud: 0.018,
        source: Some(FALLBACK_SOURCE.to_string()),
    }
}

/// `ER-API` wire shapes and conversion to the stable contract.
mod erapi {
    use serde::Deserialize;

    use super::{BASE_CURRENCY, SERVICE};
    use crate::error::FeedError;
    use crate::models::ExchangeRateSet;

    #[derive(Debug, Deserialize)]
    pub struct LatestResponse {
        pub result: String,
        // Absent when the provider reports an error result.
        pub rates: Option<RateTable>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RateTable {
        #[serde(rename = "USD")]
        pub usd: f64,
        #[serde(rename = "EUR")]
        pub eur: f64,
        #[serde(rename = "GBP")]
        pub gbp: f64,
        #[serde(rename = "JPY")]
        pub jpy: f64,
        #[serde(rename = "AUD")]
        pub aud: f64,
    }

    impl LatestResponse {
        /// The provider signals errors in-band via `result`, so a 200
        /// response is only trustworthy after this check.
        pub fn into_rate_set(self) -> Result<ExchangeRateSet, FeedError> {
            if self.result != "success" {
                return Err(FeedError::Declared {
                    service: SERVICE,
                    detail: format!("result was \"{}\"", self.result),
                });
            }

            let rates = self.rates.ok_or_else(|| FeedError::Malformed {
                service: SERVICE,
                detail: "rates object is missing".to_string(),
            })?;

            Ok(ExchangeRateSet {
                base: BASE_CURRENCY.to_string(),
                usd: rates.usd,
                eur: rates.eur,
                gbp: rates.gbp,
                jpy: rates.jpy,
                aud: rates.aud,
                source: None,
            })
        }
    }
}
