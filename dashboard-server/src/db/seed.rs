//! Seed file loading
//!
//! A seed file is a JSON snapshot of users, campaigns, and payments used
//! to bring the in-memory store up with data at startup. Typically an
//! export from the main platform, pointed at via `SEED_FILE`.

use std::path::Path;

use serde::Deserialize;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Campaign, Payment, User};

#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

pub fn load_seed(path: impl AsRef<Path>) -> AppResult<SeedData> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_message(ErrorCode::ConfigError, format!("failed to read seed file: {e}"))
            .with_detail("path", path.display().to_string())
    })?;
    let seed: SeedData = serde_json::from_str(&raw)?;
    Ok(seed)
}
