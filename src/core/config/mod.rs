//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! git-taz has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! `$GIT_TAZ_GIT_BIN` overrides `git_binary` from any file.
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GIT_TAZ_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/git-taz/config.toml`
//! 3. `~/.git-taz/config.toml` (canonical write location)
//!
//! # Repo Config Location
//!
//! `.git/git-taz/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use git_taz::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo"))).unwrap();
//! println!("git binary: {}", config.git_binary().display());
//! println!("log count: {}", config.log_max_count());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::git::exec::ENV_GIT_BIN;
use crate::ops::DEFAULT_LOG_COUNT;

/// Environment variable naming an explicit global config file.
pub const ENV_CONFIG: &str = "GIT_TAZ_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("'{0}' cannot be set per repository")]
    GlobalOnly(ConfigKey),

    #[error("home directory not found")]
    NoHomeDir,
}

/// A settable configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    GitBinary,
    Interactive,
    LogMaxCount,
}

impl ConfigKey {
    /// All keys, in listing order.
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::GitBinary,
        ConfigKey::Interactive,
        ConfigKey::LogMaxCount,
    ];

    /// The key as written in TOML.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::GitBinary => "git_binary",
            ConfigKey::Interactive => "interactive",
            ConfigKey::LogMaxCount => "log_max_count",
        }
    }

    /// Whether the key may appear in a repo config file.
    pub fn repo_scoped(self) -> bool {
        matches!(self, ConfigKey::LogMaxCount)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules. Repo config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if one was found)
    pub repo: Option<RepoConfig>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `repo_path` is provided, also loads repo-specific config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing config files are not an error.
    pub fn load(repo_path: Option<&Path>) -> Result<Config, ConfigError> {
        let global_path = Self::find_global();
        Self::load_from(global_path.as_deref(), repo_path)
    }

    /// Load configuration from an explicit global file and repository.
    ///
    /// A `global_path` that does not exist yields defaults.
    pub fn load_from(
        global_path: Option<&Path>,
        repo_path: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        let (global, global_found) = match global_path.filter(|p| p.exists()) {
            Some(path) => (read_toml::<GlobalConfig>(path)?, Some(path.to_path_buf())),
            None => (GlobalConfig::default(), None),
        };

        let (repo, repo_found) = match repo_path {
            Some(path) => Self::load_repo(path)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        tracing::debug!(
            global = ?global_found,
            repo = ?repo_found,
            "configuration loaded"
        );

        Ok(Config {
            global,
            repo,
            global_path: global_found,
            repo_path: repo_found,
        })
    }

    /// Locate the global config file, if any exists.
    fn find_global() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(ENV_CONFIG) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Some(xdg_home) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("git-taz/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".git-taz/config.toml"))
            .filter(|path| path.exists())
    }

    fn load_repo(repo_path: &Path) -> Result<(Option<RepoConfig>, Option<PathBuf>), ConfigError> {
        let path = Self::repo_config_path(repo_path);
        if !path.exists() {
            return Ok((None, None));
        }
        let config = read_toml::<RepoConfig>(&path)?;
        Ok((Some(config), Some(path)))
    }

    /// Get the path global config is written to.
    ///
    /// `$GIT_TAZ_CONFIG` when set, otherwise `~/.git-taz/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(ENV_CONFIG) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".git-taz/config.toml"))
    }

    /// Get the canonical path for repo config.
    pub fn repo_config_path(repo_path: &Path) -> PathBuf {
        repo_path.join(".git/git-taz/config.toml")
    }

    /// Write global config atomically.
    ///
    /// Goes back to the file it was loaded from, if any, otherwise to
    /// [`Config::global_config_path`].
    pub fn write_global(&self, config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        let path = match &self.global_path {
            Some(path) => path.clone(),
            None => Self::global_config_path()?,
        };
        write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write repo config atomically.
    pub fn write_repo(repo_path: &Path, config: &RepoConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::repo_config_path(repo_path);
        write_config_atomic(&path, config)?;
        Ok(path)
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// The git binary to launch.
    ///
    /// `$GIT_TAZ_GIT_BIN` wins over the config file; defaults to `git`.
    pub fn git_binary(&self) -> PathBuf {
        pick_git_binary(std::env::var_os(ENV_GIT_BIN), self.global.git_binary.as_deref())
    }

    /// Check if interactive mode is enabled by default.
    ///
    /// Defaults to `true` if not configured.
    pub fn interactive(&self) -> bool {
        self.global.interactive.unwrap_or(true)
    }

    /// Number of commits `log` shows.
    pub fn log_max_count(&self) -> usize {
        self.repo
            .as_ref()
            .and_then(|r| r.log_max_count)
            .or(self.global.log_max_count)
            .unwrap_or(DEFAULT_LOG_COUNT)
    }

    /// The effective value of `key`, rendered for display.
    pub fn value(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::GitBinary => self.git_binary().display().to_string(),
            ConfigKey::Interactive => self.interactive().to_string(),
            ConfigKey::LogMaxCount => self.log_max_count().to_string(),
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

impl GlobalConfig {
    /// Parse `value` and store it under `key`.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        match key {
            ConfigKey::GitBinary => self.git_binary = Some(PathBuf::from(value)),
            ConfigKey::Interactive => self.interactive = Some(parse_bool(value)?),
            ConfigKey::LogMaxCount => self.log_max_count = Some(parse_count(value)?),
        }
        self.validate()
    }
}

impl RepoConfig {
    /// Parse `value` and store it under `key`.
    ///
    /// Only repo-scoped keys are accepted.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        match key {
            ConfigKey::LogMaxCount => self.log_max_count = Some(parse_count(value)?),
            other => return Err(ConfigError::GlobalOnly(other)),
        }
        self.validate()
    }
}

fn pick_git_binary(env: Option<OsString>, configured: Option<&Path>) -> PathBuf {
    env.filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("git"))
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue(format!(
            "expected a boolean, got '{value}'"
        ))),
    }
}

fn parse_count(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(format!("expected a count, got '{value}'")))
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write a config file via a temp file and rename.
fn write_config_atomic<T: serde::Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

    let temp_path = path.with_extension("toml.tmp");
    let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

    fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
