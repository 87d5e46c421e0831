//! Recent-activity feed
//!
//! Human-readable strings for the dashboard sidebar. The caller supplies
//! payments newest-first (the store guarantees that order); this module
//! only truncates and formats, it never re-sorts.

use shared::models::{ActivityEntry, Payment};
use shared::util::millis_to_rfc3339;

/// Number of feed entries shown on the dashboard
pub const ACTIVITY_LIMIT: usize = 5;

/// Format the newest `limit` payments as feed entries.
pub fn recent_activity(payments: &[Payment], limit: usize) -> Vec<ActivityEntry> {
    payments.iter().take(limit).map(entry).collect()
}

fn entry(p: &Payment) -> ActivityEntry {
    let who = if p.anonymous {
        "Anonymous"
    } else {
        p.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Someone")
    };

    // f64 Display keeps whole rupees bare: 100, not 100.0
    let text = match p.campaign_title.as_deref().filter(|t| !t.is_empty()) {
        Some(title) => format!(
            "{who} supported your campaign \"{title}\" with ₹{}",
            p.amount
        ),
        None => format!("{who} supported your campaign with ₹{}", p.amount),
    };

    ActivityEntry {
        id: p.id.to_string(),
        text,
        time: millis_to_rfc3339(p.created_at),
    }
}
