//! Component weights for the EFIS aggregation.
//!
//! The defaults sum to 1.00 by construction. Caller-supplied weights are
//! accepted even when they do not sum to 1 — the total then scales
//! proportionally, exactly as the demo behaved. `normalized()` is the
//! opt-in correction for deployments that want a true convex combination.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Non-negative weight per component. Serialized camelCase on the wire;
/// snake_case accepted from TOML config via aliases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    #[serde(alias = "human_capital")]
    pub human_capital: f64,
    #[serde(alias = "social_capital")]
    pub social_capital: f64,
    pub reputation: f64,
    pub behavioral: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            human_capital: 0.30,
            social_capital: 0.25,
            reputation: 0.25,
            behavioral: 0.20,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.human_capital + self.social_capital + self.reputation + self.behavioral
    }

    /// Scale so the weights sum to 1. A degenerate all-zero vector is left
    /// untouched rather than divided by ~0.
    pub fn normalized(&self) -> Self {
        let denom = self.sum();
        if denom <= f64::EPSILON {
            return *self;
        }
        Self {
            human_capital: self.human_capital / denom,
            social_capital: self.social_capital / denom,
            reputation: self.reputation / denom,
            behavioral: self.behavioral / denom,
        }
    }

    /// Every weight must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, w) in [
            ("humanCapital", self.human_capital),
            ("socialCapital", self.social_capital),
            ("reputation", self.reputation),
            ("behavioral", self.behavioral),
        ] {
            if !w.is_finite() {
                bail!("weight `{name}` must be a finite number, got {w}");
            }
            if w < 0.0 {
                bail!("weight `{name}` must be non-negative, got {w}");
            }
        }
        Ok(())
    }
}
