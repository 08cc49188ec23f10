//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration: where the collection persists and which
/// remote endpoints serve the enrichment lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Durable storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Remote lookup endpoints
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Settings for the durable storage slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File holding the serialized customer collection
    pub path: PathBuf,
}

/// Endpoint URLs for the two lookup services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// PAN verification endpoint
    pub pan_url: String,

    /// Postcode detail endpoint
    pub postcode_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("customers.json"),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            pan_url: "https://lab.pixel6.co/api/verify-pan.php".to_string(),
            postcode_url: "https://lab.pixel6.co/api/get-postcode-details.php".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}
