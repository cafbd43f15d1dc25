//! Response shapes for the three feed endpoints.
//!
//! These are the stable contracts the dashboard client renders directly,
//! so live and fallback payloads must serialize identically apart from
//! the provenance tag.

use serde::{Deserialize, Serialize};

/// Current conditions for one city.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherReading {
    /// City name as the provider resolved it
    pub city: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Human-readable description of weather conditions
    pub condition: String,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

/// Exchange rates for the fixed INR-based basket.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExchangeRateSet {
    /// Base currency; always "INR"
    pub base: String,
    pub usd: f64,
    pub eur: f64,
    pub gbp: f64,
    pub jpy: f64,
    pub aud: f64,
    /// Provenance tag, set only for substituted data; live responses
    /// omit the field entirely
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
}

/// A single quotation with its provenance.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Quotation {
    pub quote: String,
    pub author: String,
    /// Upstream provider name, or the local-fallback marker
    pub source: String,
}
