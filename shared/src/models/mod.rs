//! Data models
//!
//! Shared between the dashboard server and frontend (via API).
//! All IDs are `i64` snowflake values; all timestamps are unix
//! milliseconds; all amounts are f64 rupees.

pub mod campaign;
pub mod dashboard;
pub mod payment;
pub mod user;

// Re-exports
pub use campaign::*;
pub use dashboard::*;
pub use payment::*;
pub use user::*;
