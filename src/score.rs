//! score.rs — Input/output shapes for the EFIS calculation.
//!
//! Wire names are camelCase to match the JSON shape the demo frontend already
//! consumes (`totalScore`, `components.humanCapital`, ...). The TOML config
//! uses snake_case, covered by serde aliases on `Weights`.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::weights::Weights;

/// Raw signals for one scoring request. Nothing is pre-normalized; the engine
/// does its own scaling and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInput {
    /// Annual-income-like value (currency units per year).
    pub human_capital: f64,
    /// Social-network strength, domain scale (observed 0–100).
    pub social_capital: f64,
    /// Reputation signal, domain scale (observed 0–100).
    pub reputation: f64,
    /// Behavioral signal, domain scale (observed 0–100).
    pub behavioral: f64,
    /// Optional per-request weight overrides; falls back to the engine config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
}

impl ScoreInput {
    pub fn new(human_capital: f64, social_capital: f64, reputation: f64, behavioral: f64) -> Self {
        Self {
            human_capital,
            social_capital,
            reputation,
            behavioral,
            weights: None,
        }
    }

    /// Override the configured weights for this request (builder style).
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Boundary validation: every signal must be a finite number. Negative or
    /// out-of-range values pass; the calculators clamp instead of rejecting.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("humanCapital", self.human_capital),
            ("socialCapital", self.social_capital),
            ("reputation", self.reputation),
            ("behavioral", self.behavioral),
        ] {
            if !v.is_finite() {
                bail!("field `{name}` must be a finite number, got {v}");
            }
        }
        if let Some(w) = &self.weights {
            w.validate()?;
        }
        Ok(())
    }
}

/// The four sub-scores, each independently clamped to [0, 1000].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    pub human_capital: u32,
    pub social_capital: u32,
    pub reputation: u32,
    pub behavioral: u32,
}

/// Complete scoring result. Ephemeral: computed on demand, never persisted
/// by this crate (any storage is the caller's concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Composite score in [0, 1000].
    pub total_score: u32,
    pub components: ComponentScores,
    /// Display-only summary; no downstream logic reads this.
    pub breakdown: String,
}

impl ScoreResult {
    pub(crate) fn new(total_score: u32, components: ComponentScores) -> Self {
        let breakdown = format!(
            "EFIS Score: {}/1000 (H:{}, S:{}, R:{}, B:{})",
            total_score,
            components.human_capital,
            components.social_capital,
            components.reputation,
            components.behavioral
        );
        Self {
            total_score,
            components,
            breakdown,
        }
    }
}

/// Clamp a raw component value into [0, 1000] and round to the nearest integer.
pub(crate) fn clamp_component(x: f64) -> u32 {
    x.clamp(0.0, 1000.0).round() as u32
}
