//! Get Me a Chai - Dashboard Aggregation Server
//!
//! # Overview
//!
//! Standalone statistics sidecar for the "Get Me a Chai" crowdfunding
//! platform. The main app pushes payment, campaign, and creator records
//! here; this service answers with the fully aggregated creator dashboard
//! payload: stat cards with period-over-period deltas, zero-filled chart
//! series, and a recent activity feed.
//!
//! # Module structure
//!
//! ```text
//! dashboard-server/src/
//! ├── core/     # configuration, state, HTTP server
//! ├── api/      # HTTP routes and handlers
//! ├── stats/    # windows, period stats, chart series, activity feed
//! ├── db/       # storage trait + in-memory store + seed loading
//! └── utils/    # errors, logging, time helpers, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod stats;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use db::{DashboardStore, MemoryStore};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: .env file first, then logging.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").ok();
    let dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(level.as_deref(), dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ________          _
  / ____/ /_  ____ _(_)
 / /   / __ \/ __ `/ /
/ /___/ / / / /_/ / /
\____/_/ /_/\__,_/_/
    ____             __
   / __ \____ ______/ /_
  / / / / __ `/ ___/ __ \
 / /_/ / /_/ (__  ) / / /
/_____/\__,_/____/_/ /_/
    "#
    );
}
