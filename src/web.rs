use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{self, AppState};

/// Where the built frontend lands, relative to the working directory.
const ASSET_DIR: &str = "client-dist";

/// Full application router: JSON API under `/api`, static frontend
/// everywhere else, permissive CORS over the lot.
pub fn app(state: Arc<AppState>) -> Router {
    app_with_assets(state, Path::new(ASSET_DIR))
}

/// Same router with the asset directory made explicit, so tests can point
/// it at a scratch directory.
pub fn app_with_assets(state: Arc<AppState>, assets: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown paths fall back to index.html so client-side routes survive
    // a full page reload.
    let index: PathBuf = assets.join("index.html");
    let frontend = ServeDir::new(assets).fallback(ServeFile::new(index));

    Router::new()
        .nest("/api", api::router())
        .fallback_service(frontend)
        .layer(cors)
        .with_state(state)
}

pub async fn run(state: Arc<AppState>) -> Result<()> {
    let port = state.config.port;
    let app = app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app)
        .await
        .context("Web server stopped unexpectedly")?;
    Ok(())
}
