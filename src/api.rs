use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::config::{config_path, EngineConfig, EngineHandle};
use crate::engine::ScoreEngine;
use crate::history::{ScoreHistory, ScoreRecord};
use crate::score::{ScoreInput, ScoreResult};
use crate::weights::Weights;

#[derive(Clone)]
pub struct AppState {
    engine: EngineHandle,
    history: Arc<ScoreHistory>,
}

impl AppState {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            history: Arc::new(ScoreHistory::with_capacity(2000)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/score", post(score))
        .route("/score/batch", post(score_batch))
        .route("/debug/weights", get(debug_weights))
        .route("/debug/history", get(debug_history))
        .route("/debug/last-score", get(debug_last_score))
        .route("/admin/reload-config", get(admin_reload_config))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn score(
    State(state): State<AppState>,
    Json(input): Json<ScoreInput>,
) -> Result<Json<ScoreResult>, (StatusCode, String)> {
    counter!("efis_score_requests_total").increment(1);
    let result = state.engine.calculate(&input).map_err(reject)?;
    debug!(total = result.total_score, "scored profile");
    state.history.push(&result);
    Ok(Json(result))
}

async fn score_batch(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<ScoreInput>>,
) -> Result<Json<Vec<ScoreResult>>, (StatusCode, String)> {
    counter!("efis_score_requests_total").increment(inputs.len() as u64);

    let mut results = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let result = state.engine.calculate(input).map_err(reject)?;
        state.history.push(&result);
        results.push(result);
    }
    Ok(Json(results))
}

/// Validation failures become 422 with the validator's message; anything else
/// (lock poisoning) would be a 500, but the engine itself never fails on
/// finite inputs.
fn reject(e: anyhow::Error) -> (StatusCode, String) {
    counter!("efis_score_invalid_total").increment(1);
    (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
}

async fn debug_weights(State(state): State<AppState>) -> Json<Weights> {
    Json(state.engine.weights())
}

async fn debug_history(State(state): State<AppState>) -> Json<Vec<ScoreRecord>> {
    Json(state.history.snapshot_last_n(10))
}

async fn debug_last_score(State(state): State<AppState>) -> Json<Option<ScoreRecord>> {
    Json(state.history.snapshot_last_n(1).pop())
}

async fn admin_reload_config(State(state): State<AppState>) -> String {
    let path = config_path();
    match EngineConfig::load() {
        Ok(cfg) => match state.engine.replace(ScoreEngine::new(cfg)) {
            Ok(()) => "reloaded".to_string(),
            Err(_) => "failed: lock poisoned".to_string(),
        },
        Err(e) => format!("failed: {} ({})", e, path.display()),
    }
}
