//! Runtime configuration.
//!
//! Read from `pathgen.toml` in the working directory (or `--config <file>`).
//! A missing default file is not an error; every key has a default.

use crate::core::error::PathgenError;
use crate::core::schemas;
use crate::core::store::Store;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "PATHGEN_DB";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub db_path: PathBuf,
    pub audit_log: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(schemas::DEFAULT_DB_PATH),
            audit_log: true,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn store(&self) -> Store {
        Store {
            db_path: self.db_path.clone(),
            audit: self.audit_log,
        }
    }

    /// Apply a `PATHGEN_DB` value on top of the file settings.
    pub fn with_db_override(mut self, db_override: Option<String>) -> Self {
        if let Some(path) = db_override.filter(|p| !p.trim().is_empty()) {
            self.db_path = PathBuf::from(path);
        }
        self
    }
}

pub fn parse_config(content: &str) -> Result<Config, PathgenError> {
    toml::from_str(content).map_err(|e| PathgenError::ConfigError(e.to_string()))
}

/// Load configuration from an explicit file, or from `<dir>/pathgen.toml` when present.
///
/// An explicit path that does not exist is an error; the implicit one is optional.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, PathgenError> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(PathgenError::ConfigError(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            parse_config(&fs::read_to_string(path)?)?
        }
        None => {
            let path = dir.join(schemas::CONFIG_FILE_NAME);
            if path.exists() {
                parse_config(&fs::read_to_string(&path)?)?
            } else {
                Config::default()
            }
        }
    };

    let db_override = match std::env::var(DB_PATH_ENV) {
        Ok(v) => Some(v),
        Err(std::env::VarError::NotPresent) => None,
        Err(e) => return Err(e.into()),
    };
    Ok(config.with_db_override(db_override))
}
