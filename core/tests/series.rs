//! Synthesizer behavior tests: length, bounds, rounding, and the
//! pinned trend-before-point ordering.

use chrono::NaiveDate;
use paydash_core::{
    generator::DashboardGenerator, rng::SeededStream, series::synthesize, store::MemoryStore,
    timeframe::DateRange,
};

fn build(profile: &str, range: &str) -> DashboardGenerator {
    let today = NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date");
    DashboardGenerator::new(profile, range, Box::new(MemoryStore::new()), today)
        .expect("build generator")
}

fn assert_series_well_formed(series: &[f64], expected_len: usize, context: &str) {
    assert_eq!(series.len(), expected_len, "{context}: wrong length");
    for &v in series {
        assert!(v >= 0.0, "{context}: negative value {v}");
        let rounded = (v * 100.0).round() / 100.0;
        assert_eq!(v, rounded, "{context}: more than 2 decimal places: {v}");
    }
}

#[test]
fn series_length_is_determined_by_range() {
    assert_eq!(DateRange::Last7Days.data_points(), 7);
    assert_eq!(DateRange::Last12Months.data_points(), 12);

    let mut gen_7 = build("growth", "Last 7 days");
    assert_eq!(gen_7.generate_main_chart_data().current.len(), 7);

    let mut gen_12 = build("growth", "Last 12 months");
    assert_eq!(gen_12.generate_main_chart_data().current.len(), 12);
}

#[test]
fn all_generated_series_are_non_negative_and_rounded() {
    for profile in ["startup", "growth", "scale", "enterprise"] {
        for range in DateRange::ALL {
            let mut generator = build(profile, range.label());
            let data = generator.generate_all_data();
            let n = range.data_points();
            let ctx = format!("{profile}/{}", range.label());

            assert_series_well_formed(&data.chart_data.current, n, &ctx);
            assert_series_well_formed(&data.chart_data.baseline, n, &ctx);
            assert_series_well_formed(&data.chart_data.optimized, n, &ctx);

            for (card, breakdown) in &data.breakdown_data {
                assert_series_well_formed(&breakdown.volume, n, card);
                assert_series_well_formed(&breakdown.count, n, card);
                assert_series_well_formed(&breakdown.success_rate, n, card);
            }
            for (failure, breakdown) in &data.failed_data {
                assert_series_well_formed(&breakdown.count, n, failure);
                assert_series_well_formed(&breakdown.amount, n, failure);
            }
        }
    }
}

/// The trend accumulates before each point is taken, so point 0
/// already carries one increment. This ordering looks like an
/// off-by-one but is part of the compatibility contract: this test
/// pins it so nobody "fixes" it silently.
#[test]
fn trend_applies_before_the_first_point() {
    let mut stream = SeededStream::new(42);
    // Zero volatility makes the jitter factor exactly 1.0.
    let data = synthesize(&mut stream, 100.0, 0.0, 1.0, 3);

    // Point 0: 101 damped by the weekend factor (index 0), then
    // plain 102 and 103.
    assert_eq!(data, vec![80.8, 102.0, 103.0]);
}

#[test]
fn weekend_damping_is_phased_to_sequence_index() {
    let mut stream = SeededStream::new(42);
    let data = synthesize(&mut stream, 100.0, 0.0, 0.0, 8);

    // Indexes 0, 6, and 7 (7 % 7 == 0) are damped 20%.
    assert_eq!(
        data,
        vec![80.0, 100.0, 100.0, 100.0, 100.0, 100.0, 80.0, 80.0]
    );
}

#[test]
fn negative_trend_is_floored_at_zero() {
    let mut stream = SeededStream::new(7);
    let data = synthesize(&mut stream, 5.0, 0.1, -2.0, 10);
    assert!(data.iter().all(|&v| v >= 0.0));
    // By point 3 the trend has driven the base negative.
    assert_eq!(data[4], 0.0);
}
