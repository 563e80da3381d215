//! Human-capital component: a smoothed monthly income figure with
//! credential bonus tiers gated on the annual amount.

use crate::score::clamp_component;

const PERSISTENCE: f64 = 0.95;
const PROCESS_NOISE: f64 = 200.0;
const MEASUREMENT_NOISE: f64 = 800.0;

/// Income-threshold-gated bonus tiers: (annual threshold, increment).
/// Tiers are independent, not mutually exclusive; raw >= 100k meets all four
/// for a multiplier of 1.36.
const CREDENTIAL_TIERS: [(f64, f64); 4] = [
    (50_000.0, 0.03),
    (60_000.0, 0.10),
    (80_000.0, 0.15),
    (100_000.0, 0.08),
];

/// Score an annual income-like signal into [0, 1000].
pub fn score(raw_annual: f64) -> u32 {
    let monthly = raw_annual / 12.0;
    let filtered = smooth(monthly);
    let bonus = credential_multiplier(raw_annual);
    clamp_component((filtered / 100.0) * bonus * 10.0)
}

/// One linear filter step over the monthly figure. The prior estimate is
/// seeded from the same observation, so the innovation is zero and the
/// update leaves the value unchanged; the demo shipped with this exact
/// arithmetic and downstream numbers depend on it staying as-is.
fn smooth(monthly: f64) -> f64 {
    let predicted = PERSISTENCE * monthly + (1.0 - PERSISTENCE) * monthly;
    let gain = PROCESS_NOISE / (PROCESS_NOISE + MEASUREMENT_NOISE);
    predicted + gain * (monthly - predicted)
}

/// Bonus multiplier starting at 1.0, plus one increment per tier met.
pub(crate) fn credential_multiplier(raw_annual: f64) -> f64 {
    let mut bonus = 1.0;
    for (threshold, increment) in CREDENTIAL_TIERS {
        if raw_annual >= threshold {
            bonus += increment;
        }
    }
    bonus
}
