//! Utility modules - common helpers and types
//!
//! # Contents
//!
//! - [`AppError`] / [`ApiResponse`] - unified error types (from `shared::error`)
//! - [`time`] - business-timezone conversions
//! - [`validation`] - input validation helpers
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
