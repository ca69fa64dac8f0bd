//! Process-wide extension ⇄ media type table.
//!
//! Starts empty; [`init_catalog`](super::init_catalog) teaches it the
//! catalog's formats. Other code may register more pairs.

use std::path::Path;
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Bidirectional mapping between file extensions and media types.
#[derive(Debug, Default, Clone)]
pub struct MediaTypeRegistry {
    types_by_extension: FxHashMap<String, String>,
    extensions_by_type: FxHashMap<String, Vec<String>>,
}

impl MediaTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `extension` (with or without leading dot) for `mime_type`.
    ///
    /// A repeated extension is remapped to the newest type; each type keeps
    /// its extensions in registration order.
    pub fn register(&mut self, mime_type: &str, extension: &str) {
        let extension = normalize_extension(extension);
        self.types_by_extension
            .insert(extension.clone(), mime_type.to_string());

        let extensions = self
            .extensions_by_type
            .entry(mime_type.to_string())
            .or_default();
        if !extensions.contains(&extension) {
            extensions.push(extension);
        }
    }

    pub fn mime_type_for_extension(&self, extension: &str) -> Option<&str> {
        self.types_by_extension
            .get(&normalize_extension(extension))
            .map(String::as_str)
    }

    /// Guess a media type from a path's extension.
    pub fn guess_type(&self, path: &Path) -> Option<&str> {
        let extension = path.extension()?.to_str()?;
        self.mime_type_for_extension(extension)
    }

    /// Registered extensions for a media type, with leading dots.
    pub fn extensions_for(&self, mime_type: &str) -> &[String] {
        self.extensions_by_type
            .get(mime_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.types_by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types_by_extension.is_empty()
    }
}

fn normalize_extension(extension: &str) -> String {
    let lower = extension.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

static MEDIA_TYPES: LazyLock<RwLock<MediaTypeRegistry>> =
    LazyLock::new(|| RwLock::new(MediaTypeRegistry::new()));

/// The process-wide registry.
pub fn media_types() -> &'static RwLock<MediaTypeRegistry> {
    &MEDIA_TYPES
}

/// Guess a media type for `path` from the process-wide registry.
pub fn guess_mime_type(path: &Path) -> Option<String> {
    media_types().read().guess_type(path).map(str::to_string)
}

/// First registered extension for `mime_type` in the process-wide registry.
pub fn guess_extension(mime_type: &str) -> Option<String> {
    media_types()
        .read()
        .extensions_for(mime_type)
        .first()
        .cloned()
}
