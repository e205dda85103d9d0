//! Application configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use core_kernel::{FixedLatency, NoLatency, SharedLatency};
use domain_auth::{FileStorage, MemoryStorage, SessionStorage};

use crate::error::AppError;

/// Prefix of the environment variables read by [`AppConfig::from_env`]
pub const ENV_PREFIX: &str = "STAR_PROTECT";

/// Simulated service delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Single-record reads
    pub read_ms: u64,
    /// Creates, updates and listings
    pub write_ms: u64,
    /// Sign-in
    pub auth_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            read_ms: 500,
            write_ms: 800,
            auth_ms: 800,
        }
    }
}

impl LatencyConfig {
    /// No delays at all
    pub fn none() -> Self {
        Self {
            read_ms: 0,
            write_ms: 0,
            auth_ms: 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.read_ms == 0 && self.write_ms == 0 && self.auth_ms == 0
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Directory for the stored session; in-memory storage when absent
    pub storage_dir: Option<PathBuf>,
    /// Simulated latency
    pub latency: LatencyConfig,
    /// Seed the demo underwriter `UW001` into the directory
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            storage_dir: None,
            latency: LatencyConfig::default(),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Configuration for tests: no delays, in-memory storage, demo seed
    pub fn for_tests() -> Self {
        Self {
            latency: LatencyConfig::none(),
            ..Self::default()
        }
    }

    /// Loads configuration from `STAR_PROTECT__*` environment variables
    ///
    /// Nested keys use `__`, e.g. `STAR_PROTECT__LATENCY__WRITE_MS=0`.
    /// Anything not set keeps its default; a value that does not parse is an
    /// `AppError::Configuration`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_environment(Self::environment())
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// The environment source used by [`AppConfig::from_env`]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    /// Builds the latency strategy for the services
    pub fn latency_strategy(&self) -> SharedLatency {
        if self.latency.is_zero() {
            Arc::new(NoLatency)
        } else {
            Arc::new(FixedLatency::from_millis(
                self.latency.read_ms,
                self.latency.write_ms,
                self.latency.auth_ms,
            ))
        }
    }

    /// Builds the session storage adapter
    pub fn storage(&self) -> Arc<dyn SessionStorage> {
        match &self.storage_dir {
            Some(dir) => Arc::new(FileStorage::new(dir.clone())),
            None => Arc::new(MemoryStorage::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment().source(Some(source))
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_environment(environment(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.latency.write_ms, 800);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_nested_overrides() {
        let config = AppConfig::from_environment(environment(&[
            ("STAR_PROTECT__LOG_LEVEL", "debug"),
            ("STAR_PROTECT__LATENCY__WRITE_MS", "0"),
            ("STAR_PROTECT__SEED_DEMO_DATA", "false"),
            ("STAR_PROTECT__STORAGE_DIR", "/tmp/star-protect"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.latency.write_ms, 0);
        assert_eq!(config.latency.read_ms, 500);
        assert!(!config.seed_demo_data);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/star-protect")));
    }

    #[test]
    fn test_unparseable_value_is_a_configuration_error() {
        let err = AppConfig::from_environment(environment(&[(
            "STAR_PROTECT__LATENCY__WRITE_MS",
            "fast",
        )]))
        .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_zero_latency_selects_no_delay() {
        let strategy = AppConfig::for_tests().latency_strategy();
        assert!(format!("{:?}", strategy).contains("NoLatency"));
    }
}
