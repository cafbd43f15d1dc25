//! Dashboard server binary: load configuration, wire up the feed
//! clients, start serving.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulseboard::{AppConfig, AppState, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pulseboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting dashboard server on port {}", config.port);
    if config.openweather_key.is_none() {
        tracing::warn!("OPENWEATHER_KEY is not set, /api/weather will return errors");
    }

    let state = Arc::new(AppState::new(config)?);
    web::run(state).await
}
