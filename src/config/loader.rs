//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.carnet.toml` in the project directory
//! 4. `~/.config/carnet/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{DEFAULT_INDENT, DEFAULT_TABLE};
use crate::env::Env;
use crate::store::JsonFileStore;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
}

/// Where and how contacts are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file. `None` means the per-user data directory.
    pub path: Option<PathBuf>,
    /// Table inside the database file.
    pub table: String,
    /// Spaces per indentation level in the database file.
    pub indent: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            table: DEFAULT_TABLE.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Field validation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Validate phone number and names before every save.
    pub on_save: bool,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, project-local config, then applies
    /// environment variable overrides.
    pub fn load(project_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: project-local config
        if let Some(dir) = project_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Database file used when none is configured.
    ///
    /// Lives in the per-user data directory, or the working directory when
    /// that cannot be determined.
    pub fn default_db_path() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join(crate::constants::CONFIG_DIR).join(crate::constants::DB_FILENAME))
            .unwrap_or_else(|| PathBuf::from(crate::constants::DB_FILENAME))
    }

    /// Resolved database file path.
    pub fn db_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(Self::default_db_path)
    }

    /// Open the configured JSON file store.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::open(self.db_path())
            .with_table(self.storage.table.clone())
            .with_indent(self.storage.indent)
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_storage = StorageConfig::default();
        if other.storage.path.is_some() {
            self.storage.path = other.storage.path;
        }
        if other.storage.table != default_storage.table {
            self.storage.table = other.storage.table;
        }
        if other.storage.indent != default_storage.indent {
            self.storage.indent = other.storage.indent;
        }

        if other.validation.on_save {
            self.validation.on_save = true;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_DB) {
            if !val.is_empty() {
                self.storage.path = Some(PathBuf::from(val));
            }
        }
        if let Ok(val) = env.var(crate::constants::ENV_TABLE) {
            if !val.is_empty() {
                self.storage.table = val;
            }
        }
        if env.is_set(crate::constants::ENV_VALIDATE) {
            match env.flag(crate::constants::ENV_VALIDATE) {
                Some(on) => self.validation.on_save = on,
                None => tracing::warn!(
                    var = crate::constants::ENV_VALIDATE,
                    "ignoring invalid boolean value"
                ),
            }
        }
    }
}
