//! Time-series synthesis.
//!
//! One function, total over its domain: valid inputs never error
//! and never panic. Reproducibility depends on draw order, so the
//! synthesizer consumes exactly one stream draw per point, always.

use crate::rng::SeededStream;

pub const DEFAULT_VOLATILITY: f64 = 0.15;

/// Synthesize a bounded series around `base`.
///
/// Per point: the trend accumulates BEFORE the value is taken, so
/// point 0 already carries one trend increment. That ordering is
/// load-bearing for compatibility with existing datasets — do not
/// reorder. Indexes 0 and 6 of each 7-point cycle are damped 20%
/// (weekend effect, phased to the sequence, not the calendar).
/// Values are floored at zero and rounded to 2 decimal places.
pub fn synthesize(
    stream: &mut SeededStream,
    base: f64,
    volatility: f64,
    trend: f64,
    len: usize,
) -> Vec<f64> {
    let mut data = Vec::with_capacity(len);
    let mut current = base;

    for i in 0..len {
        current += trend;

        let weekend_effect = if i % 7 == 0 || i % 7 == 6 { 0.8 } else { 1.0 };
        let random_factor = 1.0 + (stream.next_f64() - 0.5) * volatility * 2.0;

        let value = (current * weekend_effect * random_factor).max(0.0);
        data.push((value * 100.0).round() / 100.0);
    }

    data
}
