//! Unified error handling
//!
//! The canonical types live in `shared::error`; this module re-exports
//! them so server code can use `crate::utils::{AppError, AppResult}`.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
