//! Error types for upstream feed calls.

use serde_json::Value;
use thiserror::Error;

/// Failure of a single upstream fetch.
///
/// The currency and quote handlers absorb every variant and substitute
/// static data; only the weather handler surfaces these to the caller,
/// flattened into its 500 envelope via [`FeedError::details`].
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request never completed: connect failure, timeout, DNS.
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success HTTP status. `body` holds
    /// the response body, parsed as JSON when possible.
    #[error("{service} returned HTTP {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: Value,
    },

    /// A 200 response whose body declares failure (e.g. the exchange-rate
    /// provider's `result` field).
    #[error("{service} declared failure: {detail}")]
    Declared {
        service: &'static str,
        detail: String,
    },

    /// The body did not match the shape the provider documents.
    #[error("{service} response could not be parsed: {detail}")]
    Malformed {
        service: &'static str,
        detail: String,
    },

    /// A credential the endpoint depends on is not configured.
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),
}

impl FeedError {
    /// JSON diagnostic for the weather error envelope: the upstream's own
    /// error body when one was received, otherwise the error message.
    pub fn details(&self) -> Value {
        match self {
            FeedError::Status { body, .. } if !body.is_null() => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}
