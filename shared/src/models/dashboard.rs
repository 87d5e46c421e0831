//! Dashboard payload models
//!
//! The wire contract for the creator dashboard frontend. Everything here
//! serializes to plain JSON scalars: camelCase keys, RFC 3339 timestamp
//! strings, no native date or id types.

use serde::{Deserialize, Serialize};

/// Aggregated statistics for one period (today / week / month / all-time)
///
/// `*_change` fields are whole percentages versus the immediately
/// preceding equal-length period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub earnings: f64,
    pub supporters: i64,
    pub campaigns: i64,
    pub avg_donation: i64,
    pub earnings_change: i64,
    pub supporters_change: i64,
    pub campaigns_change: i64,
    pub avg_donation_change: i64,
}

/// Stats for the four dashboard periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    pub today: PeriodStats,
    pub week: PeriodStats,
    pub month: PeriodStats,
    /// Hyphenated key is the frontend contract
    #[serde(rename = "all-time")]
    pub all_time: PeriodStats,
}

/// One bucket of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub amount: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// The three chart series
///
/// Lengths are fixed: 24 hourly, 30 daily, 12 monthly buckets, zero-filled
/// when no payments fall inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartData {
    pub hourly: Vec<ChartPoint>,
    pub daily: Vec<ChartPoint>,
    pub monthly: Vec<ChartPoint>,
}

/// Recent-activity feed entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Payment id, stringified for the frontend
    pub id: String,
    pub text: String,
    /// RFC 3339 timestamp of the payment
    pub time: String,
}

/// The complete dashboard payload served to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub chart_data: ChartData,
    pub activities: Vec<ActivityEntry>,
}
