use std::sync::Arc;

use shared::error::AppResult;

use crate::core::Config;
use crate::db::{self, DashboardStore, MemoryStore};

/// Shared server state
///
/// Handlers receive this via axum `State`. Both fields are behind `Arc`,
/// so cloning is shallow.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable after startup)
    pub config: Arc<Config>,
    /// Storage backend
    pub store: Arc<dyn DashboardStore>,
}

impl ServerState {
    pub fn new(config: Config, store: Arc<dyn DashboardStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Initialize server state
    ///
    /// Builds the in-memory store and, when `SEED_FILE` is configured,
    /// loads the seed snapshot into it before the server starts serving.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let store = MemoryStore::new();

        if let Some(path) = &config.seed_file {
            let seed = db::load_seed(path)?;
            tracing::info!(
                users = seed.users.len(),
                campaigns = seed.campaigns.len(),
                payments = seed.payments.len(),
                "Seed snapshot loaded from {path}"
            );
            store.load_seed(seed).await;
        }

        Ok(Self::new(config.clone(), Arc::new(store)))
    }
}
