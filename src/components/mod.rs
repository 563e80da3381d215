// src/components/mod.rs
//! The four EFIS component calculators. Each maps one raw signal to a
//! [0, 1000] sub-score with its own flavor of smoothing or simulation.
//! Social capital and reputation draw from the caller-supplied RNG;
//! human capital and behavioral are deterministic.

pub mod behavioral;
pub mod human_capital;
pub mod reputation;
pub mod social_capital;

/// Simulated endorsement/loan counts are capped here so extreme-magnitude
/// inputs cannot turn a request into an unbounded loop. The [0, 1000] clamp
/// saturates long before this bound, so the cap never changes an output.
pub(crate) const MAX_SIMULATED_EVENTS: i64 = 10_000;

/// Derived event count: `floor(raw / divisor) + base`, floored at zero for
/// negative signals and capped at `MAX_SIMULATED_EVENTS`.
pub(crate) fn event_count(raw: f64, divisor: f64, base: i64) -> u64 {
    let derived = (raw / divisor).floor() as i64;
    derived.saturating_add(base).clamp(0, MAX_SIMULATED_EVENTS) as u64
}
