// src/config.rs
//! Engine configuration: TOML file + env overrides, and the thread-safe
//! handle the HTTP layer holds (with dev-gated polling hot reload).
//!
//! TOML shape:
//! ```toml
//! normalize_weights = false
//! # seed = 42
//!
//! [weights]
//! human_capital = 0.30
//! social_capital = 0.25
//! reputation = 0.25
//! behavioral = 0.20
//! ```

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

use crate::engine::ScoreEngine;
use crate::score::{ScoreInput, ScoreResult};
use crate::weights::Weights;

// --- env defaults & names ---
pub const DEFAULT_CONFIG_PATH: &str = "config/efis.toml";

pub const ENV_CONFIG_PATH: &str = "EFIS_CONFIG_PATH";
pub const ENV_NORMALIZE_WEIGHTS: &str = "EFIS_NORMALIZE_WEIGHTS";
pub const ENV_RNG_SEED: &str = "EFIS_RNG_SEED";
pub const ENV_HOT_RELOAD: &str = "EFIS_HOT_RELOAD";

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default weights, used when a request carries no override.
    pub weights: Weights,
    /// Divide weights by their sum before aggregating. Off by default: the
    /// demo accepted weights that don't sum to 1 and scaled the total.
    pub normalize_weights: bool,
    /// Fixed RNG seed for the simulated draws. None → thread RNG.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            normalize_weights: false,
            seed: None,
        }
    }
}

/// Resolve the config file path from the environment, with fallback.
pub fn config_path() -> PathBuf {
    std::env::var(ENV_CONFIG_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

impl EngineConfig {
    /// Load from the resolved path. A missing file is not an error (the
    /// defaults match the published demo); a malformed file is.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        let mut cfg = match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content)?,
            Err(e) => {
                warn!(
                    "No engine config at {} ({}); using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        };
        cfg.apply_env_overrides();
        cfg.weights.validate()?;
        Ok(cfg)
    }

    /// Load from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: EngineConfig = toml::from_str(toml_str)?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var(ENV_NORMALIZE_WEIGHTS) {
            self.normalize_weights = matches!(v.trim(), "1" | "true" | "TRUE" | "True");
        }
        if let Ok(v) = std::env::var(ENV_RNG_SEED) {
            match v.trim().parse::<u64>() {
                Ok(s) => self.seed = Some(s),
                Err(_) => warn!("Ignoring non-numeric {ENV_RNG_SEED}={v}"),
            }
        }
    }
}

/* ----------------------------
Thread-safe handle + hot reload
---------------------------- */

/// A threadsafe handle that can hot-reload the underlying engine in dev/local.
/// - Enable by setting EFIS_HOT_RELOAD=1
/// - Dev-gated: active only if cfg!(debug_assertions) OR SHUTTLE_ENV is "local"/"development".
#[derive(Clone)]
pub struct EngineHandle {
    inner: Arc<RwLock<ScoreEngine>>,
}

impl EngineHandle {
    pub fn new(engine: ScoreEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Score through the shared engine.
    pub fn calculate(&self, input: &ScoreInput) -> anyhow::Result<ScoreResult> {
        match self.inner.read() {
            Ok(engine) => engine.calculate(input),
            Err(_) => anyhow::bail!("engine lock poisoned"),
        }
    }

    /// Currently configured default weights (as the engine applies them).
    pub fn weights(&self) -> Weights {
        self.inner
            .read()
            .map(|e| e.config().weights)
            .unwrap_or_default()
    }

    /// Swap in a freshly-configured engine (admin reload, hot reload).
    pub fn replace(&self, engine: ScoreEngine) -> anyhow::Result<()> {
        match self.inner.write() {
            Ok(mut guard) => {
                *guard = engine;
                Ok(())
            }
            Err(_) => anyhow::bail!("engine lock poisoned"),
        }
    }
}

/// Returns true if we should enable hot reload (dev/local only).
fn hot_reload_enabled() -> bool {
    let want = std::env::var(ENV_HOT_RELOAD)
        .ok()
        .map(|v| v == "1")
        .unwrap_or(false);
    if !want {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Start a simple polling watcher on `path` to hot-reload into `handle`.
/// Polls mtime every 2s. Uses only std, no external deps.
pub fn start_hot_reload_thread(handle: EngineHandle, path: PathBuf) {
    if !hot_reload_enabled() {
        return;
    }

    thread::spawn(move || {
        let poll = Duration::from_secs(2);
        let mut last_mtime: Option<SystemTime> = None;

        loop {
            match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(mtime) => {
                    let changed = match last_mtime {
                        None => {
                            last_mtime = Some(mtime);
                            false
                        }
                        Some(prev) => mtime > prev,
                    };
                    if changed {
                        if let Ok(content) = fs::read_to_string(&path) {
                            match EngineConfig::from_toml_str(&content) {
                                Ok(cfg) if cfg.weights.validate().is_ok() => {
                                    if handle.replace(ScoreEngine::new(cfg)).is_ok() {
                                        info!("Engine config hot-reloaded from {}", path.display());
                                    }
                                }
                                _ => warn!("Ignoring invalid config at {}", path.display()),
                            }
                        }
                        last_mtime = Some(mtime);
                    }
                }
                Err(_) => {
                    // File missing or unreadable; keep trying.
                }
            }
            thread::sleep(poll);
        }
    });
}
