//! EFIS Scoring Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the score engine, shared state, and middleware.
//!
//! See `README.md` for quickstart and `config/efis.toml` for engine settings.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use umoja_score_engine::api::{self, AppState};
use umoja_score_engine::config::{config_path, start_hot_reload_thread, EngineConfig, EngineHandle};
use umoja_score_engine::engine::ScoreEngine;
use umoja_score_engine::metrics::Metrics;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - EFIS_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("EFIS_DEV_LOG").ok().is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("umoja_score_engine=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    // This enables EFIS_CONFIG_PATH / EFIS_RNG_SEED from .env.
    let _ = dotenvy::dotenv();

    // Initialize dev tracing early (no-op in production).
    enable_dev_tracing();

    // --- Initialize the score engine ---
    let cfg = EngineConfig::load().expect("Failed to load engine config");
    let handle = EngineHandle::new(ScoreEngine::new(cfg));

    // If hot reload is enabled, spawn background watcher
    start_hot_reload_thread(handle.clone(), config_path());

    // Prometheus recorder + weight gauges
    let metrics = Metrics::init(handle.weights());

    // Build AppState and pass it into the router
    let state = AppState::new(handle);
    let router = api::router(state).merge(metrics.router());

    Ok(router.into())
}
