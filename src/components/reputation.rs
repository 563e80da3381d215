//! Reputation component: a simulated streak-weighted repayment history.
//! Consecutive successful repayments compound via the streak factor; a
//! missed repayment resets the streak.

use rand::{Rng, RngCore};

use super::event_count;
use crate::score::clamp_component;

const LOAN_DIVISOR: f64 = 20.0;
const BASE_LOANS: i64 = 3;
const LOAN_MIN: f64 = 500.0;
const LOAN_MAX: f64 = 3_500.0;
const LOAN_SATURATION: f64 = 1_000.0;
const REPAY_PROBABILITY: f64 = 0.95;
const STREAK_FACTOR: f64 = 1.15;
const SCORE_SCALE: f64 = 50.0;

/// Score a raw reputation signal into [0, 1000] using the supplied RNG.
pub fn score(raw: f64, rng: &mut dyn RngCore) -> u32 {
    let loans = event_count(raw, LOAN_DIVISOR, BASE_LOANS);

    let mut streak: i32 = 0;
    let mut acc = 0.0;
    for _ in 0..loans {
        let size = rng.random_range(LOAN_MIN..=LOAN_MAX);
        if rng.random_bool(REPAY_PROBABILITY) {
            streak += 1;
            acc += STREAK_FACTOR.powi(streak) * (size / LOAN_SATURATION).tanh();
        } else {
            streak = 0;
        }
    }

    clamp_component(acc * SCORE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn stays_in_range_across_seeds() {
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = score(90.0, &mut rng);
            assert!(s <= 1000, "seed {seed} gave {s}");
        }
    }

    #[test]
    fn same_seed_same_score() {
        let mut a = StdRng::seed_from_u64(21);
        let mut b = StdRng::seed_from_u64(21);
        assert_eq!(score(90.0, &mut a), score(90.0, &mut b));
    }

    #[test]
    fn deeply_negative_signal_scores_zero() {
        // floor(-200/20) + 3 = -7 loans -> floored to zero draws
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(score(-200.0, &mut rng), 0);
    }

    #[test]
    fn zero_signal_keeps_base_loans_nonzero() {
        // 3 loans at 95% repayment: a fully-missed history is possible but
        // vanishingly rare; assert the usual case deterministically by seed.
        let mut rng = StdRng::seed_from_u64(2);
        let s = score(0.0, &mut rng);
        assert!(s > 0, "expected some repaid loans at seed 2, got {s}");
    }

    #[test]
    fn extreme_signal_saturates_not_overflows() {
        // Huge loan counts make the streak factor explode toward infinity;
        // the clamp must still pin the score at 1000.
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(score(1e15, &mut rng), 1000);
    }
}
