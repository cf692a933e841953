//! Optimization ledger — the catalog of togglable payment features.
//!
//! The ledger owns the persisted representation outright: it is
//! reconstructed to the known-good default catalog on every load,
//! and re-persisted on every toggle. Impact figures are fixed per
//! entry; only their time/profile scaling is computed.

use crate::{
    error::DashResult,
    profile::BusinessProfile,
    rng::SeededStream,
    store::LedgerStore,
    timeframe::DateRange,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the serialized catalog lives in the store.
pub const STORAGE_KEY: &str = "optimization_catalog";

/// Days an optimization takes to reach full credited impact.
const IMPACT_RAMP_DAYS: f64 = 21.0;

/// Spread of the shared jitter applied to aggregate totals (±5%).
const TOTAL_JITTER_SPREAD: f64 = 0.1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EffortTier {
    Easy,
    Medium,
    Hard,
}

/// Fixed business impact of one optimization at full ramp, before
/// profile scaling. Success rate is in percentage points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    pub volume: f64,
    pub payments: f64,
    pub success_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Optimization {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: OptimizationStatus,
    pub enabled_date: Option<NaiveDate>,
    pub impact: Impact,
    pub category: String,
    pub effort: EffortTier,
    pub revenue: String,
}

impl Optimization {
    pub fn is_active(&self) -> bool {
        self.status == OptimizationStatus::Active
    }
}

/// One row of the per-feature breakdown: the entry's impact after
/// time and profile scaling. Inactive entries appear with zeros.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureImpact {
    pub volume: f64,
    pub payments: f64,
    pub success_rate: f64,
    pub enabled_date: Option<NaiveDate>,
    pub status: OptimizationStatus,
}

/// Aggregated optimization impact for one (profile, range) view.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSummary {
    pub volume: f64,
    pub payments: f64,
    pub success_rate: f64,
    pub features: BTreeMap<String, FeatureImpact>,
    pub active_count: usize,
    pub total_count: usize,
}

/// Timeline entry for a completed (enabled) optimization.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub enabled_date: NaiveDate,
    pub status: &'static str,
    pub revenue: String,
    pub category: String,
    pub effort: EffortTier,
}

pub struct Ledger {
    entries: Vec<Optimization>,
    store: Box<dyn LedgerStore>,
}

impl Ledger {
    /// Reconstruct the ledger from the store.
    ///
    /// Policy: any persisted state is discarded and the default
    /// catalog is installed and re-persisted. Every load starts
    /// from known-good state; stale or malformed data cannot
    /// survive a restart. Toggles persist for the lifetime of the
    /// ledger instance that made them.
    pub fn load(store: Box<dyn LedgerStore>) -> DashResult<Self> {
        if store.get(STORAGE_KEY)?.is_some() {
            log::info!("Discarding persisted optimization catalog, resetting to defaults");
        }
        store.delete(STORAGE_KEY)?;

        let ledger = Self {
            entries: default_catalog(),
            store,
        };
        ledger.persist()?;
        Ok(ledger)
    }

    fn persist(&self) -> DashResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.store.put(STORAGE_KEY, &json)
    }

    /// Activate an optimization, stamping `today` as its enablement
    /// date, and persist the full catalog. Returns Ok(false) for an
    /// unknown id, leaving both catalog and store untouched.
    pub fn enable(&mut self, id: &str, today: NaiveDate) -> DashResult<bool> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            log::warn!("enable: unknown optimization id '{id}'");
            return Ok(false);
        };
        entry.status = OptimizationStatus::Active;
        entry.enabled_date = Some(today);
        self.persist()?;
        Ok(true)
    }

    /// Deactivate an optimization and clear its enablement date.
    /// Returns Ok(false) for an unknown id, with no mutation.
    pub fn disable(&mut self, id: &str) -> DashResult<bool> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            log::warn!("disable: unknown optimization id '{id}'");
            return Ok(false);
        };
        entry.status = OptimizationStatus::Inactive;
        entry.enabled_date = None;
        self.persist()?;
        Ok(true)
    }

    pub fn entries(&self) -> &[Optimization] {
        &self.entries
    }

    pub fn active_entries(&self) -> Vec<&Optimization> {
        self.entries.iter().filter(|e| e.is_active()).collect()
    }

    pub fn inactive_entries(&self) -> Vec<&Optimization> {
        self.entries.iter().filter(|e| !e.is_active()).collect()
    }

    /// Aggregate catalog impact for one (profile, range) view.
    ///
    /// Every entry appears in the per-feature map; only active
    /// entries feed the totals. Impact ramps linearly to full
    /// credit over 21 enabled days (capped at the range length)
    /// and scales by the profile's impact factors — range
    /// multipliers deliberately do NOT apply, impact figures are
    /// absolute. One shared stream draw jitters the volume and
    /// payments totals ±5%; success-rate stays an exact sum.
    pub fn aggregate_impact(
        &self,
        profile: BusinessProfile,
        range: DateRange,
        today: NaiveDate,
        stream: &mut SeededStream,
    ) -> ImpactSummary {
        let scaling = profile.impact_scaling();
        let days_in_range = i64::from(range.multipliers().days);

        let mut total = Impact {
            volume: 0.0,
            payments: 0.0,
            success_rate: 0.0,
        };
        let mut features = BTreeMap::new();
        let mut active_count = 0;

        for entry in &self.entries {
            let enabled_days = entry
                .enabled_date
                .map(|date| (today - date).num_days().clamp(0, days_in_range))
                .unwrap_or(0);

            let time_scale = if entry.is_active() {
                (enabled_days as f64 / IMPACT_RAMP_DAYS).min(1.0)
            } else {
                0.0
            };

            let scaled_volume = entry.impact.volume * time_scale * scaling.volume;
            let scaled_payments = entry.impact.payments * time_scale * scaling.payments;
            let scaled_success = entry.impact.success_rate * time_scale * scaling.success_rate;

            if entry.is_active() {
                active_count += 1;
                total.volume += scaled_volume;
                total.payments += scaled_payments;
                total.success_rate += scaled_success;
            }

            features.insert(
                entry.title.clone(),
                FeatureImpact {
                    volume: scaled_volume,
                    payments: scaled_payments,
                    success_rate: scaled_success,
                    enabled_date: entry.enabled_date,
                    status: entry.status,
                },
            );
        }

        let random_factor = 1.0 + (stream.next_f64() - 0.5) * TOTAL_JITTER_SPREAD;

        ImpactSummary {
            volume: total.volume * random_factor,
            payments: total.payments * random_factor,
            success_rate: total.success_rate,
            features,
            active_count,
            total_count: self.entries.len(),
        }
    }

    /// Active optimizations with an enablement date, newest first.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        let mut timeline: Vec<TimelineEntry> = self
            .entries
            .iter()
            .filter(|e| e.is_active())
            .filter_map(|e| {
                e.enabled_date.map(|date| TimelineEntry {
                    id: e.id.clone(),
                    title: e.title.clone(),
                    description: e.description.clone(),
                    impact: e.impact,
                    enabled_date: date,
                    status: "completed",
                    revenue: e.revenue.clone(),
                    category: e.category.clone(),
                    effort: e.effort,
                })
            })
            .collect();

        timeline.sort_by(|a, b| b.enabled_date.cmp(&a.enabled_date));
        timeline
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid catalog date")
}

/// The fixed 8-entry default catalog: 6 active, 2 inactive.
/// Ids and impact figures are part of the data contract.
pub fn default_catalog() -> Vec<Optimization> {
    let entry = |id: &str,
                 title: &str,
                 description: &str,
                 status: OptimizationStatus,
                 enabled_date: Option<NaiveDate>,
                 impact: Impact,
                 category: &str,
                 effort: EffortTier,
                 revenue: &str| Optimization {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        enabled_date,
        impact,
        category: category.to_string(),
        effort,
        revenue: revenue.to_string(),
    };

    vec![
        entry(
            "adaptive-acceptance",
            "Adaptive Acceptance",
            "Intelligent payment routing based on success patterns",
            OptimizationStatus::Active,
            Some(date(2024, 7, 15)),
            Impact {
                volume: 12500.0,
                payments: 45.0,
                success_rate: 2.8,
            },
            "Acceptance",
            EffortTier::Medium,
            "+$15,000/year",
        ),
        entry(
            "network-tokens",
            "Network Tokens",
            "Replace card numbers with secure network tokens",
            OptimizationStatus::Active,
            Some(date(2024, 6, 10)),
            Impact {
                volume: 8200.0,
                payments: 28.0,
                success_rate: 1.5,
            },
            "Security",
            EffortTier::Easy,
            "+$9,800/year",
        ),
        entry(
            "card-account-updater",
            "Card account updater",
            "Automatically update expired or changed card details",
            OptimizationStatus::Active,
            Some(date(2024, 5, 20)),
            Impact {
                volume: 6800.0,
                payments: 22.0,
                success_rate: 1.2,
            },
            "Recovery",
            EffortTier::Easy,
            "+$8,200/year",
        ),
        entry(
            "smart-retries",
            "Smart Retries",
            "Intelligent retry logic for declined transactions",
            OptimizationStatus::Active,
            Some(date(2024, 6, 20)),
            Impact {
                volume: 18900.0,
                payments: 67.0,
                success_rate: 3.2,
            },
            "Recovery",
            EffortTier::Medium,
            "+$22,600/year",
        ),
        entry(
            "digital-wallets",
            "Digital Wallets",
            "Apple Pay and Google Pay integration",
            OptimizationStatus::Active,
            Some(date(2024, 5, 10)),
            Impact {
                volume: 15600.0,
                payments: 52.0,
                success_rate: 2.1,
            },
            "Payment Methods",
            EffortTier::Medium,
            "+$18,700/year",
        ),
        entry(
            "address-verification",
            "Address Verification",
            "Enhanced fraud prevention with address validation",
            OptimizationStatus::Inactive,
            None,
            Impact {
                volume: 4200.0,
                payments: 15.0,
                success_rate: 0.8,
            },
            "Security",
            EffortTier::Easy,
            "+$5,000/year",
        ),
        entry(
            "3d-secure",
            "3D Secure 2.0",
            "Enhanced authentication for high-risk transactions",
            OptimizationStatus::Active,
            Some(date(2024, 4, 15)),
            Impact {
                volume: 9800.0,
                payments: 34.0,
                success_rate: 1.8,
            },
            "Security",
            EffortTier::Medium,
            "+$11,800/year",
        ),
        entry(
            "installments",
            "Buy Now, Pay Later",
            "Offer installment payment options to customers",
            OptimizationStatus::Inactive,
            None,
            Impact {
                volume: 22500.0,
                payments: 78.0,
                success_rate: 2.5,
            },
            "Payment Methods",
            EffortTier::Hard,
            "+$27,000/year",
        ),
    ]
}
