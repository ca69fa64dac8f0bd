//! Service configuration.
//!
//! Read from JSON or YAML, picked by file extension. Every section and field
//! is optional and falls back to its default.
//!
//! ```yaml
//! server:
//!   workdir: /var/tmp/wps
//!   outputurl: http://example.org/wps/outputs
//! FileStorage:
//!   target: /srv/wps/outputs
//! processing:
//!   mode: slurm
//! extra:
//!   host: cluster.example.org
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InoutError, Result};
use crate::processing::ProcessingMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(alias = "FileStorage")]
    pub file_storage: FileStorageConfig,
    pub processing: ProcessingConfig,
    pub extra: ExtraConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Where handles materialize files and jobs are dumped.
    pub workdir: PathBuf,
    /// Public base URL of stored outputs.
    #[serde(alias = "outputurl")]
    pub output_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            workdir: std::env::temp_dir().join("wps"),
            output_url: "http://localhost/wps/outputs".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub target: PathBuf,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from("outputs"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub mode: ProcessingMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraConfig {
    /// Remote host that batch jobs are submitted to.
    pub host: Option<String>,
}

impl Config {
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| InoutError::config(format!("JSON: {e}")))
    }

    pub fn from_yaml_str(input: &str) -> Result<Self> {
        serde_yaml::from_str(input).map_err(|e| InoutError::config(format!("YAML: {e}")))
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| {
                InoutError::config(format!("No file extension: {}", path.display()))
            })?;
        let content =
            std::fs::read_to_string(path).map_err(|e| InoutError::filesystem(path, e))?;

        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(InoutError::config(format!(
                "Unsupported config extension: {other}"
            ))),
        }
    }
}
