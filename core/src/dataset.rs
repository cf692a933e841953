//! Generated dataset records.
//!
//! Ephemeral output types: recomputed on every call, never mutated
//! in place. Serialized field names are camelCase — the dataset's
//! JSON shape is consumed by rendering collaborators and exports.

use serde::Serialize;
use std::collections::BTreeMap;

/// Everything one dashboard view needs for a (profile, range)
/// selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDataset {
    pub metrics: HeadlineMetrics,
    pub chart_data: ChartSeries,
    pub breakdown_data: BTreeMap<String, CardBreakdown>,
    pub failed_data: BTreeMap<String, FailureBreakdown>,
}

/// Headline period totals. Pure table math, no randomness: volume
/// and payment count are per-day baselines scaled by the range's
/// day count, the rates come straight from the profile table.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineMetrics {
    pub success_rate: f64,
    pub volume: f64,
    pub payments: f64,
    pub authorization_rate: f64,
    pub fraud_rate: f64,
    pub processing_cost: f64,
    pub dispute_rate: f64,
}

/// The three main-chart success-rate series.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub current: Vec<f64>,
    pub baseline: Vec<f64>,
    pub optimized: Vec<f64>,
}

/// Per-card-type breakdown series.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardBreakdown {
    pub volume: Vec<f64>,
    pub count: Vec<f64>,
    pub success_rate: Vec<f64>,
}

/// Per-failure-type breakdown series.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FailureBreakdown {
    pub count: Vec<f64>,
    pub amount: Vec<f64>,
}
