use chrono_tz::Tz;

/// Default dashboard timezone. The platform's creator base is Indian, so
/// "today" means midnight in Kolkata unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

/// Server configuration
///
/// # Environment variables
///
/// All settings are read from the environment, with defaults:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | HTTP_PORT | 4000 | HTTP API port |
/// | TIMEZONE | Asia/Kolkata | IANA timezone for dashboard windows and bucket labels |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level filter |
/// | LOG_DIR | (unset) | When set, also write daily rolling log files here |
/// | SEED_FILE | (unset) | JSON snapshot loaded into the store at startup |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 TIMEZONE=Asia/Kolkata SEED_FILE=/data/seed.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Timezone the dashboard windows are anchored in
    pub timezone: Tz,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level filter: trace | debug | info | warn | error
    pub log_level: String,
    /// Directory for rolling log files; stdout only when unset
    pub log_dir: Option<String>,
    /// Path to a JSON seed snapshot; store starts empty when unset
    pub seed_file: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Never fails: missing or unparseable values fall back to defaults,
    /// a bad TIMEZONE additionally logs a warning.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            timezone: timezone_from_env(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            seed_file: std::env::var("SEED_FILE").ok().filter(|p| !p.is_empty()),
        }
    }

    /// Whether we run in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn timezone_from_env() -> Tz {
    match std::env::var("TIMEZONE") {
        Ok(name) => name.parse().unwrap_or_else(|_| {
            tracing::warn!("Unrecognized TIMEZONE '{name}', falling back to {DEFAULT_TIMEZONE}");
            DEFAULT_TIMEZONE
        }),
        Err(_) => DEFAULT_TIMEZONE,
    }
}
