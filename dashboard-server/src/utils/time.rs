//! Time helpers - business-timezone conversions
//!
//! All date-to-timestamp conversions happen here and in the stats layer;
//! the store only ever sees `i64` unix millis.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

/// Date + hour/minute/second in the business timezone, as unix millis.
///
/// DST gap fallback: when the local time does not exist (spring-forward),
/// take the later mapping, else fall back to UTC.
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(hour, min, sec).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of day (00:00:00) in the business timezone, as unix millis.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, tz)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}
