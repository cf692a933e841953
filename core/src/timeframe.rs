//! Reporting windows and their scaling tables.
//!
//! A DateRange fixes three things at once: how many points every
//! generated series has, the multiplier converting per-day baseline
//! metrics into period totals, and the range's seed contribution.
//! Seed assignments are append-only, same rule as profiles.

use crate::error::{DashError, DashResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    Last7Days,
    Last30Days,
    Last60Days,
    Last90Days,
    Last6Months,
    Last12Months,
}

/// Multipliers converting per-day baselines into period totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeframeMultipliers {
    pub volume: f64,
    pub payments: f64,
    pub days: u32,
}

impl DateRange {
    pub const ALL: [DateRange; 6] = [
        Self::Last7Days,
        Self::Last30Days,
        Self::Last60Days,
        Self::Last90Days,
        Self::Last6Months,
        Self::Last12Months,
    ];

    /// Parse a range label. Unlike profiles there is no documented
    /// default here: the seed table is closed and callers must pick
    /// from it, so anything else is an error.
    pub fn from_label(label: &str) -> DashResult<Self> {
        match label {
            "Last 7 days" => Ok(Self::Last7Days),
            "Last 30 days" => Ok(Self::Last30Days),
            "Last 60 days" => Ok(Self::Last60Days),
            "Last 90 days" => Ok(Self::Last90Days),
            "Last 6 months" => Ok(Self::Last6Months),
            "Last 12 months" => Ok(Self::Last12Months),
            _ => Err(DashError::UnknownDateRange {
                label: label.to_string(),
            }),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last60Days => "Last 60 days",
            Self::Last90Days => "Last 90 days",
            Self::Last6Months => "Last 6 months",
            Self::Last12Months => "Last 12 months",
        }
    }

    /// Seed contribution for this range. Append-only.
    pub fn seed(&self) -> u64 {
        match self {
            Self::Last7Days => 1,
            Self::Last30Days => 2,
            Self::Last60Days => 3,
            Self::Last90Days => 4,
            Self::Last6Months => 5,
            Self::Last12Months => 6,
        }
    }

    /// Number of points in every series generated for this range.
    /// Longer windows aggregate into coarser buckets, so the count
    /// is not proportional to days. Always non-zero.
    pub fn data_points(&self) -> usize {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 8,
            Self::Last60Days => 8,
            Self::Last90Days => 7,
            Self::Last6Months => 8,
            Self::Last12Months => 12,
        }
    }

    pub fn multipliers(&self) -> TimeframeMultipliers {
        match self {
            Self::Last7Days => TimeframeMultipliers {
                volume: 0.078,
                payments: 0.078,
                days: 7,
            },
            Self::Last30Days => TimeframeMultipliers {
                volume: 0.333,
                payments: 0.333,
                days: 30,
            },
            Self::Last60Days => TimeframeMultipliers {
                volume: 0.667,
                payments: 0.667,
                days: 60,
            },
            Self::Last90Days => TimeframeMultipliers {
                volume: 1.0,
                payments: 1.0,
                days: 90,
            },
            Self::Last6Months => TimeframeMultipliers {
                volume: 2.0,
                payments: 2.0,
                days: 180,
            },
            Self::Last12Months => TimeframeMultipliers {
                volume: 4.0,
                payments: 4.0,
                days: 365,
            },
        }
    }
}
