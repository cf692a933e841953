//! Dashboard dataset generator.
//!
//! One DashboardGenerator per (profile, range) selection: it binds
//! a fresh seeded stream and a freshly loaded ledger, and every
//! synthesis call consumes draws from that one stream in a fixed
//! order. Constructing a new generator with the same selection and
//! replaying the same call sequence yields bit-identical output.
//!
//! Draw order inside generate_all_data():
//!   main chart (current, baseline, optimized)
//!   → card breakdown (per card type: volume, count, success rate)
//!   → failure breakdown (per failure type: count, amount)
//! Do not reorder these calls — the order is part of the contract.
//!
//! Generators are not shared across threads. Concurrent dashboard
//! sessions each construct their own instance.

use crate::{
    dataset::{CardBreakdown, ChartSeries, FailureBreakdown, GeneratedDataset, HeadlineMetrics},
    error::DashResult,
    ledger::{ImpactSummary, Ledger, TimelineEntry},
    profile::{BusinessMetrics, BusinessProfile},
    rng::{resolve_seed, SeededStream},
    series::synthesize,
    store::LedgerStore,
    timeframe::DateRange,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Card types in fixed generation order.
const CARD_TYPES: [(&str, CardDistribution); 3] = [
    (
        "Credit card",
        CardDistribution {
            volume_share: 0.70,
            success_share: 0.85,
        },
    ),
    (
        "Debit card",
        CardDistribution {
            volume_share: 0.25,
            success_share: 0.75,
        },
    ),
    (
        "Prepaid card",
        CardDistribution {
            volume_share: 0.05,
            success_share: 0.95,
        },
    ),
];

/// Failure types in fixed generation order, with their share of
/// overall failures.
const FAILURE_TYPES: [(&str, f64); 4] = [
    ("Insufficient funds", 0.45),
    ("Card declined", 0.30),
    ("Expired card", 0.15),
    ("Invalid CVV", 0.10),
];

#[derive(Clone, Copy)]
struct CardDistribution {
    volume_share: f64,
    success_share: f64,
}

pub struct DashboardGenerator {
    profile: BusinessProfile,
    range: DateRange,
    points: usize,
    stream: SeededStream,
    ledger: Ledger,
    today: NaiveDate,
}

impl DashboardGenerator {
    /// Build a generator for one selection.
    ///
    /// `profile_label` falls back to growth when unrecognized;
    /// `range_label` must name a known range. `today` is the
    /// explicit clock used for enablement stamping and day-delta
    /// math — there is no ambient "now" anywhere in this crate.
    pub fn new(
        profile_label: &str,
        range_label: &str,
        store: Box<dyn LedgerStore>,
        today: NaiveDate,
    ) -> DashResult<Self> {
        let profile = BusinessProfile::from_label(profile_label);
        let range = DateRange::from_label(range_label)?;
        let seed = resolve_seed(profile, range);

        log::debug!(
            "generator: profile={} range='{}' seed={seed}",
            profile.label(),
            range.label()
        );

        Ok(Self {
            profile,
            range,
            points: range.data_points(),
            stream: SeededStream::new(seed),
            ledger: Ledger::load(store)?,
            today,
        })
    }

    pub fn profile(&self) -> BusinessProfile {
        self.profile
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Toggle access. Enable stamps the generator's explicit clock.
    pub fn enable_optimization(&mut self, id: &str) -> DashResult<bool> {
        self.ledger.enable(id, self.today)
    }

    pub fn disable_optimization(&mut self, id: &str) -> DashResult<bool> {
        self.ledger.disable(id)
    }

    /// Headline period totals. No stream draws.
    pub fn headline_metrics(&self) -> HeadlineMetrics {
        let metrics: BusinessMetrics = self.profile.metrics();
        let days = f64::from(self.range.multipliers().days);

        HeadlineMetrics {
            success_rate: metrics.success_rate,
            volume: metrics.avg_transaction_value * metrics.daily_transactions * days,
            payments: metrics.daily_transactions * days,
            authorization_rate: metrics.authorization_rate,
            fraud_rate: metrics.fraud_rate,
            processing_cost: metrics.processing_cost,
            dispute_rate: metrics.dispute_rate,
        }
    }

    /// The three main-chart series. Three synthesize calls, in
    /// current/baseline/optimized order.
    pub fn generate_main_chart_data(&mut self) -> ChartSeries {
        let base = self.profile.metrics().success_rate;

        let current = synthesize(&mut self.stream, base, 0.08, 0.2, self.points);
        let baseline = synthesize(&mut self.stream, base - 3.0, 0.1, 0.1, self.points);
        let optimized = synthesize(&mut self.stream, base + 8.0, 0.06, 0.3, self.points);

        ChartSeries {
            current,
            baseline,
            optimized,
        }
    }

    /// Card-type breakdown: volume, count, success rate per type.
    pub fn generate_breakdown_data(&mut self) -> BTreeMap<String, CardBreakdown> {
        let mut data = BTreeMap::new();

        for (card_type, dist) in CARD_TYPES {
            let base_volume = 1000.0 * dist.volume_share;
            let base_success = dist.success_share * 100.0;

            let breakdown = CardBreakdown {
                volume: synthesize(&mut self.stream, base_volume, 0.2, 0.0, self.points),
                count: synthesize(&mut self.stream, base_volume / 50.0, 0.25, 0.0, self.points),
                success_rate: synthesize(&mut self.stream, base_success, 0.1, 0.0, self.points),
            };
            data.insert(card_type.to_string(), breakdown);
        }

        data
    }

    /// Failure breakdown: count and amount per failure type.
    pub fn generate_failed_data(&mut self) -> BTreeMap<String, FailureBreakdown> {
        let mut data = BTreeMap::new();

        for (failure_type, share) in FAILURE_TYPES {
            let base_count = 50.0 * share;
            let base_amount = 75.0 * share;

            let breakdown = FailureBreakdown {
                count: synthesize(&mut self.stream, base_count, 0.3, 0.0, self.points),
                amount: synthesize(&mut self.stream, base_amount, 0.25, 0.0, self.points),
            };
            data.insert(failure_type.to_string(), breakdown);
        }

        data
    }

    /// The full dataset for one dashboard view.
    pub fn generate_all_data(&mut self) -> GeneratedDataset {
        GeneratedDataset {
            metrics: self.headline_metrics(),
            chart_data: self.generate_main_chart_data(),
            breakdown_data: self.generate_breakdown_data(),
            failed_data: self.generate_failed_data(),
        }
    }

    /// Aggregated optimization impact. Consumes one stream draw for
    /// the shared totals jitter.
    pub fn generate_optimization_data(&mut self) -> ImpactSummary {
        self.ledger
            .aggregate_impact(self.profile, self.range, self.today, &mut self.stream)
    }

    /// Enablement timeline of active optimizations, newest first.
    pub fn generate_optimization_timeline(&self) -> Vec<TimelineEntry> {
        self.ledger.timeline()
    }
}
