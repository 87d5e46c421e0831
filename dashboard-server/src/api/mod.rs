//! API Routes Module
//!
//! # Structure
//!
//! - [`health`] - liveness and build info
//! - [`dashboard`] - aggregated creator dashboard payload
//! - [`payments`] - payment ingest
//! - [`campaigns`] - campaign ingest
//! - [`users`] - creator profile ingest

pub mod campaigns;
pub mod dashboard;
pub mod health;
pub mod payments;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
