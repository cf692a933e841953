//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through one SeededStream per generator
//! instance, derived from the (profile, range) selection. Same
//! seed, same draw order, same values — on every platform.
//!
//! The recurrence is a small linear congruential generator with
//! fixed constants. Its period is short, but a generator lifetime
//! consumes at most a few hundred draws, well inside one period.
//! The constants are part of the data contract: changing them
//! changes every dataset ever produced.

use crate::{profile::BusinessProfile, timeframe::DateRange};

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Map a (profile, range) selection to its deterministic seed.
///
/// Profile seeds are spaced 1000 apart and range seeds span 1..=6,
/// so every selection gets a distinct seed. Both enums are closed;
/// label validation happens at parse time, never here.
pub fn resolve_seed(profile: BusinessProfile, range: DateRange) -> u64 {
    profile.seed() + range.seed()
}

/// A reproducible stream of floats in [0, 1).
///
/// One stream is bound to one generator instance for its whole
/// lifetime. No reseeding, no sharing across threads.
pub struct SeededStream {
    state: u64,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next float in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededStream::new(2004);
        let mut b = SeededStream::new(2004);
        for _ in 0..365 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut stream = SeededStream::new(1);
        for _ in 0..1000 {
            let v = stream.next_f64();
            assert!((0.0..1.0).contains(&v), "draw out of range: {v}");
        }
    }

    #[test]
    fn seeds_are_distinct_across_selections() {
        assert_eq!(
            resolve_seed(BusinessProfile::Growth, DateRange::Last30Days),
            2002
        );
        assert_eq!(
            resolve_seed(BusinessProfile::Scale, DateRange::Last30Days),
            3002
        );
    }
}
