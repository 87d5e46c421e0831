//! Dashboard aggregation
//!
//! Pure orchestration: slice the eligible payments into period windows,
//! compute per-period stats with change percentages, build the chart
//! series, and format the activity feed. No I/O and no clock access; the
//! caller supplies "now" in the business timezone.

use chrono::DateTime;
use chrono_tz::Tz;
use shared::models::{Campaign, ChartData, DashboardData, DashboardStats, Payment, PeriodStats};

use super::activity::{ACTIVITY_LIMIT, recent_activity};
use super::period::{period_stats, with_changes};
use super::series::{daily_series, hourly_series, monthly_series};
use super::windows::{WindowBounds, filter_by_window};

/// Build the full dashboard payload for one creator.
///
/// `payments` must be the creator's eligible payments sorted newest
/// first; `campaigns` the creator's non-deleted campaigns. Any input
/// produces a structurally well-formed payload: stats for all four
/// periods, 24/30/12 chart buckets, at most [`ACTIVITY_LIMIT`] feed
/// entries.
pub fn build_dashboard(
    campaigns: &[Campaign],
    payments: &[Payment],
    now: DateTime<Tz>,
) -> DashboardData {
    let bounds = WindowBounds::compute(now);
    let active_campaigns = campaigns.iter().filter(|c| c.is_active()).count() as i64;

    let period = |start: i64, end: Option<i64>, prev_start: i64, prev_end: Option<i64>| {
        let current = period_stats(&filter_by_window(payments, start, end), active_campaigns);
        let previous = period_stats(
            &filter_by_window(payments, prev_start, prev_end),
            active_campaigns,
        );
        with_changes(current, previous)
    };

    let stats = DashboardStats {
        today: period(
            bounds.today,
            None,
            bounds.yesterday,
            Some(bounds.today),
        ),
        week: period(
            bounds.week_ago,
            None,
            bounds.prev_week_start,
            Some(bounds.week_ago),
        ),
        month: period(
            bounds.month_ago,
            None,
            bounds.prev_month_start,
            Some(bounds.month_ago),
        ),
        // All-time compares against the empty window before any activity
        all_time: all_time_stats(payments, active_campaigns),
    };

    let chart_data = ChartData {
        hourly: hourly_series(payments, now),
        daily: daily_series(payments, now),
        monthly: monthly_series(payments, now),
    };

    DashboardData {
        stats,
        chart_data,
        activities: recent_activity(payments, ACTIVITY_LIMIT),
    }
}

fn all_time_stats(payments: &[Payment], active_campaigns: i64) -> PeriodStats {
    with_changes(
        period_stats(payments, active_campaigns),
        period_stats(&[], active_campaigns),
    )
}

/// The degraded payload served when the creator is unknown or the store
/// failed: all-zero stats, zero-filled charts, no activities.
pub fn empty_dashboard(now: DateTime<Tz>) -> DashboardData {
    build_dashboard(&[], &[], now)
}
