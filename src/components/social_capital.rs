//! Social-capital component: a simulated network-endorsement sum. Each
//! endorsement contributes endorser strength divided by network distance.

use rand::{Rng, RngCore};

use super::event_count;
use crate::score::clamp_component;

const ENDORSEMENT_DIVISOR: f64 = 10.0;
const BASE_ENDORSEMENTS: i64 = 5;
const STRENGTH_MIN: f64 = 600.0;
const STRENGTH_MAX: f64 = 800.0;
const DISTANCE_MIN: f64 = 1.0;
const DISTANCE_MAX: f64 = 3.0;

/// Score a raw social-network signal into [0, 1000] using the supplied RNG.
pub fn score(raw: f64, rng: &mut dyn RngCore) -> u32 {
    let endorsements = event_count(raw, ENDORSEMENT_DIVISOR, BASE_ENDORSEMENTS);

    let mut sum = 0.0;
    for _ in 0..endorsements {
        let strength = rng.random_range(STRENGTH_MIN..=STRENGTH_MAX);
        let distance = rng.random_range(DISTANCE_MIN..=DISTANCE_MAX);
        sum += strength / distance;
    }

    clamp_component(sum / 2.0)
}
