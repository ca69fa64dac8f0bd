//! Handing process executions to an external scheduler.
//!
//! The crate only prepares files: a serialized [`JobDescription`] and, for
//! batch schedulers, a submit script. Delivering them to a host is the job of
//! a [`JobRunner`] supplied by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{InoutError, Result};

mod slurm;

pub use slurm::SlurmProcessing;

/// How process executions are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    /// In the serving process.
    #[default]
    Default,
    /// Submitted to a Slurm cluster.
    Slurm,
}

/// Submits a prepared job script to a host.
///
/// Only reports submission failure; there is no status polling.
pub trait JobRunner: Send + Sync {
    fn submit(&self, script: &Path, host: &str) -> Result<()>;
}

/// Serializable description of one process execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub uuid: Uuid,
    /// Identifier of the process to run.
    pub process: String,
    pub workdir: PathBuf,
    /// Literal inputs by identifier, in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub inputs: IndexMap<String, String>,
}

impl JobDescription {
    pub fn new(process: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            process: process.into(),
            workdir: workdir.into(),
            inputs: IndexMap::new(),
        }
    }

    pub fn with_input(mut self, identifier: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(identifier.into(), value.into());
        self
    }

    /// Write this description as JSON to a uniquely named file in `dir`.
    pub fn dump(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| InoutError::filesystem(dir, e))?;
        let mut temp = tempfile::Builder::new()
            .prefix("job_")
            .suffix(".json")
            .tempfile_in(dir)
            .map_err(|e| InoutError::filesystem(dir, e))?;
        serde_json::to_writer_pretty(temp.as_file_mut(), self)
            .map_err(|e| InoutError::job(format!("Cannot serialize job {}: {e}", self.uuid)))?;
        let (_, path) = temp
            .keep()
            .map_err(|e| InoutError::filesystem(dir, e.error))?;
        Ok(path)
    }

    /// Read a description written by [`dump`](Self::dump).
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| InoutError::filesystem(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| InoutError::job(format!("Cannot read job {}: {e}", path.display())))
    }
}
