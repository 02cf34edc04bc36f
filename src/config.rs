//! Configuration handling for the TUI

use crate::company::Company;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default log filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "qcheck_tui=info";

const LOG_FILE_NAME: &str = "qcheck-tui.log";

/// Environment variable overriding the simulated authentication delay
const AUTH_DELAY_ENV: &str = "QCHECK_AUTH_DELAY_MS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated authentication round-trip in milliseconds
    pub auth_delay_ms: Option<u64>,
    /// `tracing` filter directive
    pub log_filter: Option<String>,
    /// Where log lines go; defaults to the platform data directory
    pub log_file: Option<PathBuf>,
    /// Client companies shown after sign-in
    #[serde(default)]
    pub companies: Vec<Company>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "qcheck", "qcheck-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Authentication delay, with the environment taking precedence
    pub fn auth_delay(&self) -> Duration {
        let from_env = std::env::var(AUTH_DELAY_ENV)
            .ok()
            .and_then(|v| v.parse::<u64>().ok());
        match from_env.or(self.auth_delay_ms) {
            Some(ms) => Duration::from_millis(ms),
            None => crate::auth::DEFAULT_DELAY,
        }
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Log file path. The terminal belongs to the UI, so logs never go to stderr.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir().join(format!("qcheck-tui-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.auth_delay_ms.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            auth_delay_ms: Some(250),
            log_filter: Some("qcheck_tui=debug".to_string()),
            log_file: Some(PathBuf::from("/tmp/qcheck.log")),
            companies: Vec::new(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.auth_delay_ms, Some(250));
        assert_eq!(parsed.log_filter(), "qcheck_tui=debug");
        assert_eq!(parsed.log_file, Some(PathBuf::from("/tmp/qcheck.log")));
    }

    #[test]
    fn test_log_path_prefers_configured_file() {
        let config = TuiConfig {
            log_file: Some(PathBuf::from("/tmp/custom.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/custom.log")));

        if let Some(path) = TuiConfig::default().log_path() {
            assert!(path.ends_with(LOG_FILE_NAME));
        }
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.auth_delay_ms.is_none());
        assert!(parsed.companies.is_empty());
    }

    #[test]
    fn test_deserialize_companies() {
        let json = r#"{"companies": [{"id": 1, "name": "Acme", "status": "SUSPENDED"}]}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.companies,
            vec![Company::new(1, "Acme", crate::company::CompanyStatus::Suspended)]
        );
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"auth_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.auth_delay_ms, Some(10));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let config = TuiConfig::load_from(&temp_config_path()).unwrap();
        assert!(config.auth_delay_ms.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config_path();
        fs::write(&path, r#"{"auth_delay_ms": 42}"#).unwrap();
        let config = TuiConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().auth_delay_ms, Some(42));
    }

    #[test]
    fn test_load_from_invalid_file_is_error() {
        let path = temp_config_path();
        fs::write(&path, "not json").unwrap();
        let result = TuiConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_auth_delay_from_config() {
        // Only meaningful when the override is not set in the test environment
        if std::env::var(AUTH_DELAY_ENV).is_ok() {
            return;
        }
        let config = TuiConfig {
            auth_delay_ms: Some(5),
            ..Default::default()
        };
        assert_eq!(config.auth_delay(), Duration::from_millis(5));
        assert_eq!(TuiConfig::default().auth_delay(), crate::auth::DEFAULT_DELAY);
    }
}
