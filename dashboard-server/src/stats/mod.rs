//! Dashboard statistics engine
//!
//! Pure computation over payment and campaign records: period stats with
//! change percentages, zero-filled chart series, and the recent-activity
//! feed. Everything in here is deterministic in its inputs. The caller
//! passes "now" explicitly, and the store has already applied the
//! eligibility filter and newest-first ordering.
//!
//! # Modules
//!
//! - [`windows`]: period boundaries and half-open window filtering
//! - [`period`]: per-window aggregates and percent changes
//! - [`series`]: hourly / daily / monthly chart buckets
//! - [`activity`]: feed text formatting
//! - [`aggregate`]: full-payload orchestration

pub mod activity;
pub mod aggregate;
pub mod period;
pub mod series;
pub mod windows;

pub use activity::{ACTIVITY_LIMIT, recent_activity};
pub use aggregate::{build_dashboard, empty_dashboard};
pub use period::{RawStats, percent_change, period_stats, with_changes};
pub use series::{daily_series, hourly_series, monthly_series};
pub use windows::{WindowBounds, filter_by_window};

#[cfg(test)]
mod tests;
