//! Runtime configuration, loaded from a TOML file.
//!
//! ```toml
//! channel_capacity = 64
//!
//! [seed]
//! kind = "file"
//! path = "board.toml"
//! ```
//!
//! A relative seed path is resolved against the directory holding the config file.

use crate::ledger::{sample_board, LedgerError, OrderLedger, SeedFile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid seed: {0}")]
    Seed(#[from] LedgerError),
}

/// Where the ledger's initial orders come from.
///
/// Variants are braced so stray keys next to `kind` are rejected for every kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case", deny_unknown_fields)]
pub enum SeedSource {
    /// The dashboard's built-in board.
    Sample {},
    /// No orders at all.
    Empty {},
    /// A TOML seed file, see [`crate::ledger::seed`].
    File { path: PathBuf },
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::Sample {}
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    /// Capacity of the request channel in front of the ledger actor.
    pub channel_capacity: usize,
    pub seed: SeedSource,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            seed: SeedSource::default(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from a file, falling back to the defaults when no
    /// path is given or the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = read(path)?;
        let mut config = Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        if let SeedSource::File { path: seed_path } = &mut config.seed {
            if seed_path.is_relative() {
                if let Some(dir) = path.parent() {
                    *seed_path = dir.join(&*seed_path);
                }
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: LedgerConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Builds the seeded ledger this configuration describes.
    pub fn build_ledger(&self) -> Result<OrderLedger, ConfigError> {
        let ledger = match &self.seed {
            SeedSource::Sample {} => OrderLedger::from_seed(sample_board())?,
            SeedSource::Empty {} => OrderLedger::default(),
            SeedSource::File { path } => {
                let contents = read(path)?;
                let seed = SeedFile::from_toml_str(&contents)
                    .map_err(|source| ConfigError::Parse {
                        path: path.clone(),
                        source,
                    })?
                    .into_seed()?;
                OrderLedger::from_seed(seed)?
            }
        };
        Ok(ledger)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
