//! Runtime configuration for the contacts CLI.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults under the temp dir.
//! - Resolution never fails; bad values surface when they are used.

use contacts_core::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "CONTACTS_DB_PATH";
pub const LOG_DIR_ENV: &str = "CONTACTS_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "CONTACTS_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "contacts.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "contacts-logs";

/// Paths and levels the CLI needs before touching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            log_dir: non_blank(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
            log_level: non_blank(LOG_LEVEL_ENV)
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn resolve(pairs: &[(&str, &str)]) -> AppConfig {
        let vars = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_live_under_temp_dir() {
        let config = resolve(&[]);
        assert_eq!(
            config.db_path,
            std::env::temp_dir().join("contacts.sqlite3")
        );
        assert!(config.log_dir.starts_with(std::env::temp_dir()));
        assert_eq!(config.log_level, contacts_core::default_log_level());
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = resolve(&[
            (DB_PATH_ENV, "  /data/contacts.db "),
            (LOG_DIR_ENV, "/var/log/contacts"),
            (LOG_LEVEL_ENV, "warn"),
        ]);
        assert_eq!(config.db_path, PathBuf::from("/data/contacts.db"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/contacts"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = resolve(&[(DB_PATH_ENV, "   ")]);
        assert_eq!(
            config.db_path,
            std::env::temp_dir().join("contacts.sqlite3")
        );
    }
}
