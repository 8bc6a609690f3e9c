//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$GIT_TAZ_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/git-taz/config.toml`
//! 3. `~/.git-taz/config.toml` (canonical write location)
//!
//! # Repo Config
//!
//! Located at `.git/git-taz/config.toml`.
//!
//! # Validation
//!
//! Values are validated after parsing; unknown keys are rejected at parse
//! time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// git_binary = "/usr/local/bin/git"
/// interactive = true
/// log_max_count = 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Path or name of the git binary
    pub git_binary: Option<PathBuf>,

    /// Default interactive mode
    pub interactive: Option<bool>,

    /// Number of commits `log` shows
    pub log_max_count: Option<usize>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(binary) = &self.git_binary {
            if binary.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "git_binary cannot be empty".to_string(),
                ));
            }
        }

        validate_log_max_count(self.log_max_count)
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// log_max_count = 50
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Number of commits `log` shows in this repository
    pub log_max_count: Option<usize>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_log_max_count(self.log_max_count)
    }
}

fn validate_log_max_count(value: Option<usize>) -> Result<(), ConfigError> {
    if value == Some(0) {
        return Err(ConfigError::InvalidValue(
            "log_max_count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod global_config {
        use super::*;

        #[test]
        fn defaults() {
            let config = GlobalConfig::default();
            assert!(config.git_binary.is_none());
            assert!(config.interactive.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn empty_binary_rejected() {
            let config = GlobalConfig {
                git_binary: Some(PathBuf::new()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn zero_log_count_rejected() {
            let config = GlobalConfig {
                log_max_count: Some(0),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn roundtrip() {
            let config = GlobalConfig {
                git_binary: Some(PathBuf::from("/opt/git/bin/git")),
                interactive: Some(false),
                log_max_count: Some(40),
            };

            let toml = toml::to_string(&config).unwrap();
            let parsed: GlobalConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }
    }

    mod repo_config {
        use super::*;

        #[test]
        fn valid_count() {
            let config = RepoConfig {
                log_max_count: Some(5),
            };
            assert!(config.validate().is_ok());
        }

        #[test]
        fn reject_unknown_fields() {
            let result: Result<RepoConfig, _> = toml::from_str("trunk = \"main\"");
            assert!(result.is_err());
        }
    }
}
