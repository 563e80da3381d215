// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod components;
pub mod config;
pub mod engine;
pub mod history;
pub mod metrics;
pub mod score;
pub mod weights;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::config::{EngineConfig, EngineHandle};
pub use crate::engine::{aggregate, calculate_efis_score, ScoreEngine};
pub use crate::score::{ComponentScores, ScoreInput, ScoreResult};
pub use crate::weights::Weights;
