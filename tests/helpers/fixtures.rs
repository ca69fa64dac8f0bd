//! Temp directories and the registered format catalog.

use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog registration runs once for the whole test binary.
static CATALOG: Lazy<()> = Lazy::new(wps_inout::init_catalog);

/// Make sure the format catalog is registered with the media type registry.
pub fn registered_catalog() {
    Lazy::force(&CATALOG);
}

/// Fresh temporary working directory.
pub fn workdir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Number of regular files directly inside `dir`.
pub fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter(|entry| entry.as_ref().is_ok_and(|e| e.path().is_file()))
        .count()
}
