//! Behavioral component: discount-rate / loss-aversion estimation. The only
//! calculator with no randomness, so it is exact-value testable.

use crate::score::clamp_component;

const MIN_DISCOUNT_RATE: f64 = 0.01;
const DISCOUNT_DIVISOR: f64 = 2_000.0;
const LOSS_AVERSION_DIVISOR: f64 = 50.0;
const LOSS_AVERSION_MIN: f64 = 1.0;
const LOSS_AVERSION_MAX: f64 = 3.0;
const DISCOUNT_TERM_SCALE: f64 = 300.0;
const LOSS_AVERSION_TERM_SCALE: f64 = 150.0;

/// Score a raw behavioral signal into [0, 1000]. Pure function of `raw`.
pub fn score(raw: f64) -> u32 {
    let discount_rate = (raw / DISCOUNT_DIVISOR).max(MIN_DISCOUNT_RATE);
    let loss_aversion = (raw / LOSS_AVERSION_DIVISOR).clamp(LOSS_AVERSION_MIN, LOSS_AVERSION_MAX);

    clamp_component(
        DISCOUNT_TERM_SCALE / (1.0 + discount_rate).ln()
            + LOSS_AVERSION_TERM_SCALE * loss_aversion,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        assert_eq!(score(95.0), score(95.0));
        assert_eq!(score(2_000.0), score(2_000.0));
    }

    #[test]
    fn zero_signal_saturates() {
        // discount 0.01, loss aversion 1.0:
        // 300/ln(1.01) + 150 ~= 30150, clamped to 1000
        assert_eq!(score(0.0), 1000);
    }

    #[test]
    fn negative_signal_hits_the_same_floors() {
        assert_eq!(score(-500.0), score(0.0));
    }

    #[test]
    fn observed_scale_inputs_all_saturate() {
        // On the 0-100 domain scale the discount term alone exceeds 1000.
        for raw in [1.0, 50.0, 95.0, 100.0] {
            assert_eq!(score(raw), 1000, "raw {raw}");
        }
    }

    #[test]
    fn exact_values_past_the_saturation_knee() {
        // discount 1.0 -> 300/ln(2) ~= 432.808; loss aversion capped at 3.0
        assert_eq!(score(2_000.0), 883);
        // discount 1.5 -> 300/ln(2.5) ~= 327.409
        assert_eq!(score(3_000.0), 777);
        // discount 2.0 -> 300/ln(3) ~= 273.071
        assert_eq!(score(4_000.0), 723);
    }

    #[test]
    fn loss_aversion_caps_at_three() {
        // raw/50 for raw >= 150 clamps to 3.0; the two terms are then a
        // strictly decreasing function of raw.
        assert!(score(2_000.0) > score(3_000.0));
        assert!(score(3_000.0) > score(4_000.0));
    }
}
