//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | variable               | default | meaning                              |
//! |------------------------|---------|--------------------------------------|
//! | `GROCERY_CATALOG_PATH` | unset   | JSON catalog file; built-in if unset |
//! | `GROCERY_LOG`          | `warn`  | tracing filter directive             |

use std::env;
use std::path::PathBuf;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the catalog file.
pub const CATALOG_PATH_VAR: &str = "GROCERY_CATALOG_PATH";

/// Environment variable holding the log filter.
pub const LOG_FILTER_VAR: &str = "GROCERY_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliConfig {
    /// Catalog file to load instead of the built-in assortment.
    pub catalog_path: Option<PathBuf>,

    /// `tracing_subscriber::EnvFilter` directive, e.g. `grocery_core=debug`.
    pub log_filter: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = match lookup(CATALOG_PATH_VAR) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(CATALOG_PATH_VAR.to_string()))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        let log_filter = lookup(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        EnvFilter::try_new(&log_filter)
            .map_err(|_| ConfigError::InvalidValue(LOG_FILTER_VAR.to_string()))?;

        Ok(CliConfig {
            catalog_path,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            (CATALOG_PATH_VAR, "/srv/catalog.json"),
            (LOG_FILTER_VAR, "grocery_core=debug"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(config.log_filter, "grocery_core=debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = CliConfig::from_lookup(lookup(&[(CATALOG_PATH_VAR, " ")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for GROCERY_CATALOG_PATH");

        let err =
            CliConfig::from_lookup(lookup(&[(LOG_FILTER_VAR, "grocery_core=loud")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for GROCERY_LOG");
    }
}
