//! Chart series builders
//!
//! Every builder zero-fills its buckets first, then adds each payment
//! whose timestamp falls inside a bucket's half-open range. Payments
//! outside every bucket are silently skipped, so the output lengths are
//! invariant: 24 hourly, 30 daily, 12 monthly points.

use chrono::{DateTime, Duration, Months};
use chrono_tz::Tz;
use shared::models::{ChartPoint, Payment};

use crate::utils::time::{day_start_millis, month_start};

const HOUR_MS: i64 = 60 * 60 * 1000;

/// The 24 hours of the current local day, labelled "00:00".."23:00".
pub fn hourly_series(payments: &[Payment], now: DateTime<Tz>) -> Vec<ChartPoint> {
    let today = day_start_millis(now.date_naive(), now.timezone());
    let mut buckets: Vec<ChartPoint> = (0..24)
        .map(|h| ChartPoint::new(format!("{h:02}:00"), 0.0))
        .collect();

    for p in payments {
        let offset = p.created_at - today;
        if (0..24 * HOUR_MS).contains(&offset) {
            buckets[(offset / HOUR_MS) as usize].amount += p.amount;
        }
    }
    buckets
}

/// The last 30 calendar days, oldest first, ending with today.
///
/// Buckets span local midnight to next local midnight; labels are
/// abbreviated month plus unpadded day ("Jan 5").
pub fn daily_series(payments: &[Payment], now: DateTime<Tz>) -> Vec<ChartPoint> {
    let tz = now.timezone();
    let today = now.date_naive();

    (0..30)
        .map(|k| {
            let date = today - Duration::days(29 - k);
            let start = day_start_millis(date, tz);
            let end = day_start_millis(date + Duration::days(1), tz);
            let amount: f64 = payments
                .iter()
                .filter(|p| p.created_at >= start && p.created_at < end)
                .map(|p| p.amount)
                .sum();
            ChartPoint::new(date.format("%b %-d").to_string(), amount)
        })
        .collect()
}

/// The last 12 calendar months, oldest first, ending with the current one.
///
/// Unlike the stats windows these are true calendar months; labels are
/// abbreviated month plus two-digit year ("Jan '24").
pub fn monthly_series(payments: &[Payment], now: DateTime<Tz>) -> Vec<ChartPoint> {
    let tz = now.timezone();
    let current = month_start(now.date_naive());

    (0..12u32)
        .map(|k| {
            let month = current - Months::new(11 - k);
            let start = day_start_millis(month, tz);
            let end = day_start_millis(month + Months::new(1), tz);
            let amount: f64 = payments
                .iter()
                .filter(|p| p.created_at >= start && p.created_at < end)
                .map(|p| p.amount)
                .sum();
            ChartPoint::new(month.format("%b '%y").to_string(), amount)
        })
        .collect()
}
