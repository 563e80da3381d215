//! # Score Engine
//! Pure, testable logic that maps a `ScoreInput` → `ScoreResult`.
//! No I/O, suitable for unit tests and offline audits.
//!
//! Policy: validate at the boundary (non-finite signals and bad weights are
//! rejected), then the computation is infallible. Randomness lives behind an
//! injectable RNG; a configured seed makes every call reproducible.

use anyhow::Result;
use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::components::{behavioral, human_capital, reputation, social_capital};
use crate::config::EngineConfig;
use crate::score::{ComponentScores, ScoreInput, ScoreResult};
use crate::weights::Weights;

/// The engine holds its configuration (default weights, normalization mode,
/// optional RNG seed) and nothing else — calls share no mutable state.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    cfg: EngineConfig,
}

impl ScoreEngine {
    pub fn new(cfg: EngineConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Compute the EFIS score. With a configured seed the result is
    /// bit-identical across calls; otherwise the social-capital and
    /// reputation draws vary per call.
    pub fn calculate(&self, input: &ScoreInput) -> Result<ScoreResult> {
        input.validate()?;
        let mut rng = self.rng();
        Ok(self.compute(input, rng.as_mut()))
    }

    /// Same computation with an explicit random source, for tests and audits.
    pub fn calculate_with_rng(
        &self,
        input: &ScoreInput,
        rng: &mut dyn RngCore,
    ) -> Result<ScoreResult> {
        input.validate()?;
        Ok(self.compute(input, rng))
    }

    /// Effective weights for a request: per-request override, else config.
    pub fn effective_weights(&self, input: &ScoreInput) -> Weights {
        let w = input.weights.unwrap_or(self.cfg.weights);
        if self.cfg.normalize_weights {
            w.normalized()
        } else {
            w
        }
    }

    fn compute(&self, input: &ScoreInput, rng: &mut dyn RngCore) -> ScoreResult {
        let components = ComponentScores {
            human_capital: human_capital::score(input.human_capital),
            social_capital: social_capital::score(input.social_capital, rng),
            reputation: reputation::score(input.reputation, rng),
            behavioral: behavioral::score(input.behavioral),
        };
        let total = aggregate(&components, &self.effective_weights(input));
        ScoreResult::new(total, components)
    }

    /// Optionally seeded RNG for reproducibility.
    fn rng(&self) -> Box<dyn RngCore> {
        match self.cfg.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        }
    }
}

/// Convenience wrapper for library consumers: score one profile with the
/// default configuration (demo weights, no normalization, thread RNG).
pub fn calculate_efis_score(input: &ScoreInput) -> Result<ScoreResult> {
    ScoreEngine::new(EngineConfig::default()).calculate(input)
}

/// Weighted sum of the four components, clamped to [0, 1000] and rounded.
pub fn aggregate(components: &ComponentScores, weights: &Weights) -> u32 {
    let total = weights.human_capital * f64::from(components.human_capital)
        + weights.social_capital * f64::from(components.social_capital)
        + weights.reputation * f64::from(components.reputation)
        + weights.behavioral * f64::from(components.behavioral);
    crate::score::clamp_component(total)
}
