use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::MarketplacePolicy;
use crate::storage::{FileStorage, MemoryStorage, StorageBackend, DEFAULT_STORAGE_KEY};

/// Errors raised while loading an [`InventoryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the product collection is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StorageConfig {
    /// Lost when the process exits.
    #[default]
    Memory,
    /// One JSON file per key inside `dir`.
    File { dir: PathBuf },
}

impl StorageConfig {
    pub fn open(&self) -> Arc<dyn StorageBackend> {
        match self {
            StorageConfig::Memory => Arc::new(MemoryStorage::new()),
            StorageConfig::File { dir } => Arc::new(FileStorage::new(dir.clone())),
        }
    }
}

/// Settings for an [`InventorySystem`](super::InventorySystem).
///
/// Every field has a default, so `{}` is a valid config file:
///
/// ```json
/// {
///   "storage": { "kind": "file", "dir": "./data" },
///   "storage_key": "inventory-products",
///   "marketplace_policy": { "kind": "dynamic" },
///   "seed_samples": true,
///   "channel_buffer": 32
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub storage: StorageConfig,
    pub storage_key: String,
    pub marketplace_policy: MarketplacePolicy,
    /// Write the sample catalog into an empty store on start.
    pub seed_samples: bool,
    /// How many requests may queue for the dashboard controller.
    pub channel_buffer: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            marketplace_policy: MarketplacePolicy::default(),
            seed_samples: true,
            channel_buffer: 32,
        }
    }
}

impl InventoryConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}
