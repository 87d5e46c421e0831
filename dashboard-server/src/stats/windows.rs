//! Period window boundaries
//!
//! All four dashboard periods share one set of boundaries anchored to
//! local midnight of the current day in the business timezone. Derived
//! boundaries are fixed 24-hour offsets from `today`; only `today`
//! itself is calendar-aware. "Month" here is a rolling 30 days, not a
//! calendar month (the monthly chart is the calendar-aware one).

use chrono::DateTime;
use chrono_tz::Tz;
use shared::models::Payment;

use crate::utils::time::day_start_millis;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Window boundaries in unix millis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    /// Local midnight of the current day
    pub today: i64,
    /// today - 1 day
    pub yesterday: i64,
    /// today - 7 days
    pub week_ago: i64,
    /// today - 14 days
    pub prev_week_start: i64,
    /// today - 30 days
    pub month_ago: i64,
    /// today - 60 days
    pub prev_month_start: i64,
}

impl WindowBounds {
    /// Compute boundaries for the instant `now` in its timezone.
    pub fn compute(now: DateTime<Tz>) -> Self {
        let today = day_start_millis(now.date_naive(), now.timezone());
        Self {
            today,
            yesterday: today - DAY_MS,
            week_ago: today - 7 * DAY_MS,
            prev_week_start: today - 14 * DAY_MS,
            month_ago: today - 30 * DAY_MS,
            prev_month_start: today - 60 * DAY_MS,
        }
    }
}

/// Select payments whose `created_at` falls in the half-open `[start, end)`.
///
/// `None` end means unbounded above. Returns a new vector in input order;
/// the input is untouched.
pub fn filter_by_window(payments: &[Payment], start: i64, end: Option<i64>) -> Vec<Payment> {
    payments
        .iter()
        .filter(|p| p.created_at >= start && end.is_none_or(|e| p.created_at < e))
        .cloned()
        .collect()
}
