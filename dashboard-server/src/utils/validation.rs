//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! ingest endpoints. The aggregation layer itself never validates; stored
//! records are taken as-is.

use crate::utils::AppError;
use shared::error::ErrorCode;

// ── Text length limits ──────────────────────────────────────────────

/// Creator usernames (URL segment)
pub const MAX_USERNAME_LEN: usize = 100;

/// Display names: supporter name, campaign title
pub const MAX_NAME_LEN: usize = 200;

/// Supporter messages, campaign descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (ingest handlers) ────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a payment amount: finite and non-negative.
///
/// The store and stats layers take amounts as-is, so this is the only
/// place a NaN can be kept out of the system.
pub fn validate_amount(amount: f64) -> Result<(), AppError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::PaymentInvalidAmount,
            format!("amount must be a non-negative number, got {amount}"),
        ));
    }
    Ok(())
}
