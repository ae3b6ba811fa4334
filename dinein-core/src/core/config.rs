//! Application configuration
//!
//! # Environment variables
//!
//! | Variable          | Default     | Meaning                                 |
//! |-------------------|-------------|-----------------------------------------|
//! | ENVIRONMENT       | development | development / staging / production      |
//! | LOG_LEVEL         | info        | tracing max level                       |
//! | LOG_DIR           | (unset)     | directory for daily rolling log files   |
//! | TABLE_COUNT       | 20          | highest selectable table number         |
//! | CURRENCY_SYMBOL   | $           | prefix used when formatting money       |
//!
//! # Example
//!
//! ```ignore
//! TABLE_COUNT=12 LOG_LEVEL=debug cargo run --bin dinein
//! ```

/// Default highest table number offered by the table picker
pub const DEFAULT_TABLE_COUNT: u8 = 20;

/// Default currency prefix
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    /// tracing max level
    pub log_level: String,
    /// Rolling log file directory; stdout when unset
    pub log_dir: Option<String>,
    /// Tables are numbered 1..=table_count
    pub table_count: u8,
    /// Money formatting prefix
    pub currency_symbol: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            table_count: std::env::var("TABLE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &u8| *n > 0)
                .unwrap_or(DEFAULT_TABLE_COUNT),
            currency_symbol: std::env::var("CURRENCY_SYMBOL")
                .unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            table_count: DEFAULT_TABLE_COUNT,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
        }
    }
}
