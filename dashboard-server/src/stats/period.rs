//! Per-period statistics
//!
//! Aggregates one already-filtered payment subset. Amounts are summed
//! as-is: a malformed record propagates through the numbers instead of
//! crashing the dashboard, and the ingest boundary is where validation
//! happens.

use std::collections::HashSet;

use shared::models::{Payment, PeriodStats};

/// Per-window aggregates before change fields are attached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawStats {
    pub earnings: f64,
    pub supporters: i64,
    pub campaigns: i64,
    pub avg_donation: i64,
}

/// Supporter identity used for dedup: user id, else email, else name,
/// else the shared "unknown" bucket. Empty strings count as missing.
fn supporter_identity(p: &Payment) -> &str {
    for field in [p.user_id.as_deref(), p.email.as_deref(), p.name.as_deref()] {
        if let Some(s) = field
            && !s.is_empty()
        {
            return s;
        }
    }
    "unknown"
}

/// Aggregate one payment subset.
///
/// `active_campaigns` is a snapshot of the creator's currently active
/// campaigns, passed through unchanged rather than derived from the
/// subset. Every period reports the same count.
pub fn period_stats(payments: &[Payment], active_campaigns: i64) -> RawStats {
    let earnings: f64 = payments.iter().map(|p| p.amount).sum();
    let supporters = payments
        .iter()
        .map(supporter_identity)
        .collect::<HashSet<_>>()
        .len() as i64;
    let avg_donation = if payments.is_empty() {
        0
    } else {
        (earnings / payments.len() as f64).round() as i64
    };

    RawStats {
        earnings,
        supporters,
        campaigns: active_campaigns,
        avg_donation,
    }
}

/// Whole-percentage change versus the previous period.
///
/// A zero previous value maps to +100 when anything was earned and 0
/// otherwise, instead of dividing by zero.
pub fn percent_change(current: f64, previous: f64) -> i64 {
    if previous == 0.0 {
        if current > 0.0 { 100 } else { 0 }
    } else {
        ((current - previous) / previous * 100.0).round() as i64
    }
}

/// Combine current and previous window aggregates into the final stats.
pub fn with_changes(current: RawStats, previous: RawStats) -> PeriodStats {
    PeriodStats {
        earnings: current.earnings,
        supporters: current.supporters,
        campaigns: current.campaigns,
        avg_donation: current.avg_donation,
        earnings_change: percent_change(current.earnings, previous.earnings),
        supporters_change: percent_change(current.supporters as f64, previous.supporters as f64),
        campaigns_change: percent_change(current.campaigns as f64, previous.campaigns as f64),
        avg_donation_change: percent_change(
            current.avg_donation as f64,
            previous.avg_donation as f64,
        ),
    }
}
