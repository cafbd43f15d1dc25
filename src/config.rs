//! Configuration for the dashboard server, read from the environment.
//!
//! Only the weather feed carries configuration (credential and default
//! city); the currency and quote upstreams are fixed URLs.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "3001";
const DEFAULT_CITY: &str = "Hyderabad,IN";

/// Environment-derived settings for the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port (`PORT`, default 3001)
    pub port: u16,
    /// OpenWeather API key (`OPENWEATHER_KEY`). The server starts without
    /// it, but `/api/weather` answers 500 until it is set.
    pub openweather_key: Option<String>,
    /// City used when the request carries no usable `city` parameter
    /// (`WEATHER_CITY`)
    pub default_city: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let openweather_key = env::var("OPENWEATHER_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let default_city = env::var("WEATHER_CITY")
            .ok()
            .filter(|city| !city.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CITY.to_string());

        Ok(Self {
            port,
            openweather_key,
            default_city,
        })
    }
}
