//! Process configuration.
//!
//! Resolution order, later wins:
//! - built-in defaults under the platform data dir (`<data_dir>/focusflow/`)
//! - `FOCUSFLOW_*` environment variables
//! - CLI flags (`--db`, `--log-dir`), applied by the app crate
//!
//! Debug builds default to `focusflow-dev.db` so a dev build never touches
//! the release database.

use std::path::PathBuf;
use std::time::Duration;

use focusflow_domain::shared::DomainError;

pub const ENV_DB_PATH: &str = "FOCUSFLOW_DB_PATH";
pub const ENV_LOG_DIR: &str = "FOCUSFLOW_LOG_DIR";
pub const ENV_DB_MAX_CONNECTIONS: &str = "FOCUSFLOW_DB_MAX_CONNECTIONS";

const APP_DIR_NAME: &str = "focusflow";

/// Timeouts applied to the backing store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageTimeouts {
    /// Maximum wait for a pooled connection (default: 10 seconds)
    pub db_query: Duration,
}

impl Default for StorageTimeouts {
    fn default() -> Self {
        Self {
            db_query: Duration::from_secs(10),
        }
    }
}

/// Process configuration. Goal thresholds are fixed and not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file, created with its parent directories if missing
    pub database_path: PathBuf,

    /// Directory for the daily rolling JSON log files
    pub log_dir: PathBuf,

    /// Pool size for the file database (default: 5)
    pub max_connections: u32,

    /// Store timeouts
    pub timeouts: StorageTimeouts,
}

impl Default for AppConfig {
    fn default() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);

        let db_filename = if cfg!(debug_assertions) {
            "focusflow-dev.db"
        } else {
            "focusflow.db"
        };

        Self {
            database_path: base.join(db_filename),
            log_dir: base.join("logs"),
            max_connections: 5,
            timeouts: StorageTimeouts::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `FOCUSFLOW_*` environment variables.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DB_PATH).filter(|v| !v.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(ENV_DB_MAX_CONNECTIONS) {
            let max: u32 = raw.trim().parse().map_err(|_| {
                DomainError::Validation(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_DB_MAX_CONNECTIONS, raw
                ))
            })?;
            if max == 0 {
                return Err(DomainError::Validation(format!(
                    "{} must be greater than zero",
                    ENV_DB_MAX_CONNECTIONS
                )));
            }
            config.max_connections = max;
        }

        Ok(config)
    }

    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }

    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = dir;
        self
    }
}
