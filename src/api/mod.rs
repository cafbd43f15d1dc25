//! JSON API: the three dashboard endpoints and their shared state.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, instrument, warn};

use crate::config::AppConfig;
use crate::error::FeedError;
use crate::feeds;
use crate::feeds::currency::{self, CurrencyClient};
use crate::feeds::quote::{self, QuoteClient};
use crate::feeds::weather::WeatherClient;
use crate::models::{ExchangeRateSet, Quotation, WeatherReading};

/// Shared application state: config plus one client per upstream feed.
///
/// All clients share a single connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub weather: WeatherClient,
    pub currency: CurrencyClient,
    pub quote: QuoteClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let http = feeds::http_client()?;
        Ok(Self {
            weather: WeatherClient::new(http.clone()),
            currency: CurrencyClient::new(http.clone()),
            quote: QuoteClient::new(http),
            config,
        })
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/currency", get(get_currency))
        .route("/quote", get(get_quote))
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    city: Option<String>,
}

/// Weather has no local substitute, so feed errors become a 500 with the
/// upstream detail attached instead of a fallback payload.
struct WeatherApiError(FeedError);

impl From<FeedError> for WeatherApiError {
    fn from(err: FeedError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WeatherApiError {
    fn into_response(self) -> Response {
        error!("Error fetching weather data: {}", self.0);
        let body = json!({
            "error": "Could not fetch weather data",
            "details": self.0.details(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[instrument(skip(state))]
async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherReading>, WeatherApiError> {
    let city = resolve_city(params.city.as_deref(), &state.config.default_city);
    let api_key = state
        .config
        .openweather_key
        .as_deref()
        .ok_or(FeedError::MissingCredential("OPENWEATHER_KEY"))?;

    let reading = state.weather.current(&city, api_key).await?;
    Ok(Json(reading))
}

#[instrument(skip(state))]
async fn get_currency(State(state): State<Arc<AppState>>) -> Json<ExchangeRateSet> {
    match state.currency.latest().await {
        Ok(rates) => Json(rates),
        Err(err) => {
            warn!("Exchange-rate feed unavailable, serving fallback rates: {}", err);
            Json(currency::fallback_rates())
        }
    }
}

#[instrument(skip(state))]
async fn get_quote(State(state): State<Arc<AppState>>) -> Json<Quotation> {
    match state.quote.random().await {
        Ok(quotation) => Json(quotation),
        Err(err) => {
            warn!("Quote feed unavailable, serving local quote: {}", err);
            Json(quote::fallback_quote())
        }
    }
}

/// A blank or missing `city` query means "use the configured city".
fn resolve_city(query: Option<&str>, default_city: &str) -> String {
    match query.map(str::trim) {
        Some(city) if !city.is_empty() => city.to_string(),
        _ => default_city.to_string(),
    }
}
