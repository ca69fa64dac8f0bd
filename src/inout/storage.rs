//! Persisting complex outputs and handing back a retrieval URL.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::{InoutError, Result};
use crate::handle::DataHandle;

/// How a stored output can be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// Stored as a file on a path served under the output URL.
    Path,
}

/// Result of storing an output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOutput {
    pub kind: StoreKind,
    /// Where the stored copy lives.
    pub reference: PathBuf,
    pub url: String,
}

/// Persists an output's data.
///
/// Implementations read through [`DataHandle::file`] or
/// [`DataHandle::stream`] and never replace the handle's source.
pub trait StorageSink: Send + Sync {
    fn store(&self, handle: &DataHandle) -> Result<StoredOutput>;
}

/// Copies outputs into a target directory served at `output_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    target: PathBuf,
    output_url: String,
}

impl FileStorage {
    /// Create the storage, making the target directory if needed.
    pub fn new(target: impl Into<PathBuf>, output_url: impl Into<String>) -> Result<Self> {
        let target = target.into();
        fs::create_dir_all(&target).map_err(|e| InoutError::filesystem(&target, e))?;
        Ok(Self {
            target,
            output_url: output_url.into(),
        })
    }

    /// Target from `file_storage.target`, URL from `server.output_url`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.file_storage.target, &config.server.output_url)
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn output_url(&self) -> &str {
        &self.output_url
    }
}

impl StorageSink for FileStorage {
    fn store(&self, handle: &DataHandle) -> Result<StoredOutput> {
        let source = handle.file()?;
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let suffix = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        let mut temp = tempfile::Builder::new()
            .prefix(&format!("{stem}_"))
            .suffix(&suffix)
            .tempfile_in(&self.target)
            .map_err(|e| InoutError::filesystem(&self.target, e))?;
        // Dropping an unkept temp file on error removes it from the target
        let mut input = File::open(&source).map_err(|e| InoutError::filesystem(&source, e))?;
        io::copy(&mut input, temp.as_file_mut())
            .map_err(|e| InoutError::filesystem(temp.path(), e))?;
        let (_, stored) = temp
            .keep()
            .map_err(|e| InoutError::filesystem(&self.target, e.error))?;

        let name = stored
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let url = format!("{}/{}", self.output_url.trim_end_matches('/'), name);
        info!("Stored output {} as {}", source.display(), url);

        Ok(StoredOutput {
            kind: StoreKind::Path,
            reference: stored,
            url,
        })
    }
}
