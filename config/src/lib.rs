//! Configuration for drift.
//!
//! ```toml
//! [inputs]
//! frequency = "${HOME}/puzzles/day1.txt"
//! claims = "inputs/day3.txt"
//!
//! [log]
//! filter = "drift_core=debug"
//! ```
//!
//! The file lives at `~/.drift/config.toml`. A missing file is not an error;
//! every section is optional.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct DriftConfig {
    pub inputs: Option<InputsConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Default puzzle input files, used when no file is given on the command line.
///
/// Values may reference environment variables as `${VAR}`.
#[derive(Debug, Default, Deserialize)]
pub struct InputsConfig {
    /// Frequency change list, one signed integer per line.
    pub frequency: Option<String>,
    /// Fabric claims, one `#id @ left,top: WxH` per line.
    pub claims: Option<String>,
}

impl InputsConfig {
    #[must_use]
    pub fn frequency_path(&self) -> Option<PathBuf> {
        expand_path(self.frequency.as_deref())
    }

    #[must_use]
    pub fn claims_path(&self) -> Option<PathBuf> {
        expand_path(self.claims.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"drift_core=debug"`.
    /// `DRIFT_LOG` takes precedence.
    pub filter: Option<String>,
}

fn expand_path(raw: Option<&str>) -> Option<PathBuf> {
    let expanded = expand_env_vars(raw?.trim());
    if expanded.is_empty() {
        None
    } else {
        Some(PathBuf::from(expanded))
    }
}

/// Replace `${VAR}` with the variable's value. Unset variables expand to
/// nothing; an unclosed `${` is kept as written.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        let after = &rest[open + 2..];
        let Some(close) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        let var = &after[..close];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

impl DriftConfig {
    /// Load from the default location. `Ok(None)` when no config exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn frequency_path(&self) -> Option<PathBuf> {
        self.inputs.as_ref().and_then(InputsConfig::frequency_path)
    }

    #[must_use]
    pub fn claims_path(&self) -> Option<PathBuf> {
        self.inputs.as_ref().and_then(InputsConfig::claims_path)
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log
            .as_ref()
            .and_then(|log| log.filter.as_deref())
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".drift").join("config.toml"))
}
