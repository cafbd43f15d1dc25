//! Random-quote client backed by Quotable.
//!
//! When the feed is down the handler picks from a small local pool
//! instead, tagged so the frontend can tell the two apart.

use std::time::Duration;

use rand::RngExt;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::FeedError;
use crate::models::Quotation;

const SERVICE: &str = "Quotable";
const DEFAULT_BASE_URL: &str = "https://api.quotable.io";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Tag carried by quotations that came from the live feed.
pub const LIVE_SOURCE: &str = "Quotable API";
/// Tag carried by quotations drawn from the local pool.
pub const FALLBACK_SOURCE: &str = "Local Fallback";

/// Local pool used when the live feed is unavailable.
pub const FALLBACK_QUOTES: [(&str, &str); 5] = [
    (
        "The best way to get started is to quit talking and begin doing.",
        "Walt Disney",
    ),
    (
        "Success is not the key to happiness. Happiness is the key to success.",
        "Albert Schweitzer",
    ),
    ("Don’t let yesterday take up too much of today.", "Will Rogers"),
    ("It always seems impossible until it’s done.", "Nelson Mandela"),
    ("Believe you can and you're halfway there.", "Theodore Roosevelt"),
];

#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Fetch one random quotation.
    pub async fn random(&self) -> Result<Quotation, FeedError> {
        let url = format!("{}/random", self.base_url);
        debug!("Quotable request");

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

        let random: quotable::RandomQuote =
            response.json().await.map_err(|err| FeedError::Malformed {
                service: SERVICE,
                detail: err.to_string(),
            })?;

        Ok(random.into_quotation())
    }
}

/// Draw a quotation from the local pool.
pub fn fallback_quote() -> Quotation {
    let index = rand::rng().random_range(0..FALLBACK_QUOTES.len());
    let (quote, author) = FALLBACK_QUOTES[index];
    Quotation {
        quote: quote.to_string(),
        author: author.to_string(),
        source: FALLBACK_SOURCE.to_string(),
    }
}

/// `Quotable` wire shapes and conversion to the stable contract.
mod quotable {
    use serde::Deserialize;

    use super::LIVE_SOURCE;
    use crate::models::Quotation;

    #[derive(Debug, Deserialize)]
    pub struct RandomQuote {
        pub content: String,
        pub author: String,
    }

    impl RandomQuote {
        pub fn into_quotation(self) -> Quotation {
            Quotation {
                quote: self.content,
                author: self.author,
                source: LIVE_SOURCE.to_string(),
            }
        }
    }
}
