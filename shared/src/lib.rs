//! Shared types for the Get Me a Chai dashboard service
//!
//! Common types used across crates: domain models, the unified error
//! system, API response structures, and small utility functions.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use util::{millis_to_rfc3339, now_millis, snowflake_id};
