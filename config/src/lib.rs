//! Configuration for ckint.
//!
//! The only setting today is how contract violations are enforced:
//!
//! ```toml
//! # ~/.ckint/config.toml
//! [enforcement]
//! mode = "permissive"   # default: "strict"
//! ```
//!
//! `CKINT_ENFORCEMENT` overrides the file.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use ckint_types::violation::{self, InstallError, UnknownEnforcement};
use ckint_types::{Enforcement, Reporter};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides `[enforcement] mode`.
pub const ENFORCEMENT_ENV: &str = "CKINT_ENFORCEMENT";

#[derive(Debug, Default, Deserialize)]
pub struct CkintConfig {
    pub enforcement: Option<EnforcementConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnforcementConfig {
    pub mode: Option<Enforcement>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{var}={value:?} is not an enforcement mode (expected \"strict\" or \"permissive\")")]
    InvalidEnv {
        var: &'static str,
        value: String,
        #[source]
        source: UnknownEnforcement,
    },
    #[error(transparent)]
    Install(#[from] InstallError),
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::InvalidEnv { .. } | ConfigError::Install(_) => None,
        }
    }
}

impl CkintConfig {
    /// Load `~/.ckint/config.toml`.
    ///
    /// Returns `None` when there is no home directory, no file, or the file
    /// cannot be read or parsed. Failures are logged, not returned.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to load config at {:?}: {}", path, err);
                None
            }
        }
    }

    /// Load a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// The mode named in the file, or the strict default.
    #[must_use]
    pub fn file_enforcement(&self) -> Enforcement {
        self.enforcement
            .as_ref()
            .and_then(|section| section.mode)
            .unwrap_or_default()
    }

    /// The effective mode: `CKINT_ENFORCEMENT` if set, else the file.
    pub fn enforcement(&self) -> Result<Enforcement, ConfigError> {
        self.enforcement_with_override(env::var(ENFORCEMENT_ENV).ok().as_deref())
    }

    fn enforcement_with_override(&self, raw: Option<&str>) -> Result<Enforcement, ConfigError> {
        match raw {
            Some(raw) => raw.parse::<Enforcement>().map_err(|source| ConfigError::InvalidEnv {
                var: ENFORCEMENT_ENV,
                value: raw.to_string(),
                source,
            }),
            None => Ok(self.file_enforcement()),
        }
    }

    /// Build the process-wide violation reporter from this config and
    /// install it. Returns the mode that was installed.
    pub fn install_reporter(&self) -> Result<Enforcement, ConfigError> {
        let enforcement = self.enforcement()?;
        violation::install(Reporter::new(enforcement))?;
        tracing::debug!(mode = enforcement.as_str(), "Enforcement configured");
        Ok(enforcement)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ckint").join("config.toml"))
}
