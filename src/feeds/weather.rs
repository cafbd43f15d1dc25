//! OpenWeather client: current conditions for a single city.
//!
//! The only feed that needs a credential, and the only one whose failures
//! the API surfaces instead of absorbing.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::FeedError;
use crate::models::WeatherReading;

const SERVICE: &str = "OpenWeather";
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL.to_string())
    }

    /// Client aimed at an alternate host; used by tests to stand in for
    /// the real provider.
    pub fn with_base_url(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Fetch current conditions for `city` (free text, already trimmed).
    pub async fn current(&self, city: &str, api_key: &str) -> Result<WeatherReading, FeedError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        debug!("OpenWeather request for city: {}", city);

        let response = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|source| FeedError::Transport {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            // Keep the provider's own error body (e.g. {"cod":"404",
            // "message":"city not found"}) for the caller's diagnostics.
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
            return Err(FeedError::Status {
                service: SERVICE,
                status,
                body,
            });
        }

        let current: openweather::CurrentResponse =
            response.json().await.map_err(|err| FeedError::Malformed {
                service: SERVICE,
                detail: err.to_string(),
            })?;

        current.into_reading()
    }
}

/// `OpenWeather` wire shapes and conversion to the stable contract.
mod openweather {
    use serde::Deserialize;

    use super::SERVICE;
    use crate::error::FeedError;
    use crate::models::WeatherReading;

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub name: String,
        pub main: MainMetrics,
        pub weather: Vec<Condition>,
        pub wind: Wind,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainMetrics {
        pub temp: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f64,
    }

    impl CurrentResponse {
        /// Reshape into the dashboard contract. The provider always sends
        /// at least one `weather` entry; an empty array is a broken body.
        pub fn into_reading(self) -> Result<WeatherReading, FeedError> {
            let condition = self
                .weather
                .into_iter()
                .next()
                .map(|c| c.description)
                .ok_or_else(|| FeedError::Malformed {
                    service: SERVICE,
                    detail: "weather array is empty".to_string(),
                })?;

            Ok(WeatherReading {
                city: self.name,
                temperature: self.main.temp,
                condition,
                humidity: self.main.humidity,
                wind_speed: self.wind.speed,
            })
        }
    }
}
