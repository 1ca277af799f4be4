//! Runtime configuration read from the environment.
//!
//! | Variable               | Meaning                                  | Default            |
//! |------------------------|------------------------------------------|--------------------|
//! | `CRM_DB_PATH`          | SQLite file backing the key-value store  | in-memory database |
//! | `CRM_LOG_LEVEL`        | `trace|debug|info|warn|error`            | per build mode     |
//! | `CRM_LOG_DIR`          | absolute directory for rolling log files | logging disabled   |
//! | `CRM_SEED_SAMPLE_DATA` | seed sample deals/contacts on first run  | `true`             |

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::logging::{default_log_level, init_logging};
use crate::store::crm_store::StoreOptions;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "CRM_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "CRM_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "CRM_LOG_DIR";
pub const ENV_SEED_SAMPLE_DATA: &str = "CRM_SEED_SAMPLE_DATA";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value `{}` for {}", self.value, self.variable)
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmConfig {
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub seed_sample_data: bool,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_sample_data: true,
        }
    }
}

impl CrmConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let seed_sample_data = match read(ENV_SEED_SAMPLE_DATA) {
            Some(value) => parse_flag(ENV_SEED_SAMPLE_DATA, &value)?,
            None => defaults.seed_sample_data,
        };

        Ok(Self {
            db_path: read(ENV_DB_PATH).map(PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            seed_sample_data,
        })
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            seed_sample_data: self.seed_sample_data,
        }
    }

    /// Opens the configured database file, or an in-memory one.
    pub fn open_db(&self) -> DbResult<Connection> {
        match &self.db_path {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns `Ok(false)` when logging stays disabled.
    pub fn init_logging(&self) -> Result<bool, String> {
        match &self.log_dir {
            Some(dir) => init_logging(&self.log_level, dir).map(|()| true),
            None => Ok(false),
        }
    }
}

fn parse_flag(variable: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            variable,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{CrmConfig, ENV_DB_PATH, ENV_LOG_LEVEL, ENV_SEED_SAMPLE_DATA};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = CrmConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CrmConfig::default());
        assert!(config.seed_sample_data);
        assert!(config.db_path.is_none());
    }

    #[test]
    fn reads_values_and_treats_blank_as_unset() {
        let config = CrmConfig::from_lookup(lookup(&[
            (ENV_DB_PATH, "/tmp/crm.sqlite3"),
            (ENV_LOG_LEVEL, "   "),
            (ENV_SEED_SAMPLE_DATA, "off"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/crm.sqlite3")));
        assert_eq!(config.log_level, CrmConfig::default().log_level);
        assert!(!config.seed_sample_data);
        assert!(!config.store_options().seed_sample_data);
    }

    #[test]
    fn rejects_unknown_flag_values() {
        let err = CrmConfig::from_lookup(lookup(&[(ENV_SEED_SAMPLE_DATA, "maybe")])).unwrap_err();
        assert_eq!(err.variable, ENV_SEED_SAMPLE_DATA);
        assert_eq!(err.value, "maybe");
    }
}
