//! A single logical datum backed by a value, a file or a stream.
//!
//! ## Representations
//!
//! ```text
//!            set_value         set_file          set_stream
//!               │                 │                  │
//!               ▼                 ▼                  ▼
//!         ┌──────────┐      ┌──────────┐      ┌──────────────┐
//!         │  Value   │      │   File   │      │    Stream    │
//!         └────┬─────┘      └────┬─────┘      └──────┬───────┘
//!              │  value() / file() / stream()        │
//!              └────────────────┬────────────────────┘
//!                               ▼
//!                  converted on demand, file() memoized
//! ```
//!
//! Exactly one representation is active. Asking for another one converts
//! lazily; producing a file from a value or a stream writes a temp file into
//! the working directory once and caches its path.

use std::any::Any;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use parking_lot::Mutex;
use tracing::{debug, trace};

use super::stream::{HandleStream, SharedReader};
use super::value::Value;
use crate::error::{InoutError, Result};

/// Prefix for files materialized from value and stream sources.
const TEMP_PREFIX: &str = "wps_";

/// Which physical form currently backs a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Value,
    File,
    Stream,
    /// Reserved. No setter activates it and its accessors always fail.
    MemoryObject,
}

/// How file and stream content is surfaced by [`DataHandle::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentMode {
    /// Content must be UTF-8 and is returned as [`Value::String`].
    #[default]
    Text,
    /// Content is returned untouched as [`Value::Bytes`].
    Binary,
}

enum Source {
    Value(Value),
    File(PathBuf),
    /// Shared with every [`HandleStream`] lent out, locked per read.
    Stream(SharedReader),
}

impl Source {
    fn kind(&self) -> SourceKind {
        match self {
            Source::Value(_) => SourceKind::Value,
            Source::File(_) => SourceKind::File,
            Source::Stream(_) => SourceKind::Stream,
        }
    }

    /// Raw bytes of this source. Stream sources are drained.
    fn read_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Source::Value(value) => Ok(value.to_bytes().into_owned()),
            Source::File(path) => fs::read(path).map_err(|e| InoutError::filesystem(path, e)),
            Source::Stream(reader) => {
                let mut bytes = Vec::new();
                reader.lock().read_to_end(&mut bytes)?;
                Ok(bytes)
            }
        }
    }
}

#[derive(Default)]
struct State {
    source: Option<Source>,
    /// Temp file produced from the current source, written at most once.
    materialized: Option<PathBuf>,
}

/// Holds one live representation of a datum and converts to the others lazily.
///
/// Reads take `&self`; the source and the materialization cache share a lock
/// so concurrent [`file`](Self::file) calls create at most one temp file.
/// Temp files are never removed by the handle.
#[derive(Default)]
pub struct DataHandle {
    state: Mutex<State>,
    workdir: Option<PathBuf>,
    content_mode: ContentMode,
}

impl DataHandle {
    /// Create an empty handle using the system temp directory for materialization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty handle that materializes files into `workdir`.
    pub fn with_workdir(workdir: impl Into<PathBuf>) -> Result<Self> {
        let mut handle = Self::new();
        handle.set_workdir(workdir)?;
        Ok(handle)
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    /// Use an in-memory value as the source.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.replace(Source::Value(value.into()));
    }

    /// Use a file as the source. The path is made absolute but need not exist yet.
    pub fn set_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let absolute = std::path::absolute(path).map_err(|e| InoutError::filesystem(path, e))?;
        self.replace(Source::File(absolute));
        Ok(())
    }

    /// Use a byte stream as the source. The stream is read at most once.
    pub fn set_stream<R: Read + Send + 'static>(&mut self, reader: R) {
        self.replace(Source::Stream(Arc::new(Mutex::new(Box::new(reader)))));
    }

    /// Memory objects are reserved and not supported.
    pub fn set_memory_object(&mut self, _object: Box<dyn Any + Send>) -> Result<()> {
        Err(InoutError::not_implemented(
            "memory object representation is not supported",
        ))
    }

    /// Decode base64 text and store the bytes as the value source.
    pub fn set_base64(&mut self, encoded: &str) -> Result<()> {
        let bytes = BASE64.decode(encoded.trim())?;
        self.set_value(Value::Bytes(bytes));
        Ok(())
    }

    fn replace(&mut self, source: Source) {
        let state = self.state.get_mut();
        trace!(kind = ?source.kind(), "replacing data handle source");
        state.source = Some(source);
        state.materialized = None;
    }

    // ------------------------------------------------------------------
    // Readers
    // ------------------------------------------------------------------

    /// Kind of the active representation, if any.
    pub fn source_kind(&self) -> Option<SourceKind> {
        self.state.lock().source.as_ref().map(Source::kind)
    }

    /// Return the datum as a value.
    ///
    /// File sources are read whole; stream sources are read to exhaustion and
    /// are consumed by this call.
    pub fn value(&self) -> Result<Value> {
        let state = self.state.lock();
        match state.source.as_ref().ok_or(InoutError::NoSource)? {
            Source::Value(value) => Ok(value.clone()),
            source => self.decode(source.read_bytes()?),
        }
    }

    /// Return the datum as a file path, materializing it on first use.
    pub fn file(&self) -> Result<PathBuf> {
        let mut guard = self.state.lock();
        let State {
            source,
            materialized,
        } = &mut *guard;
        let source = source.as_ref().ok_or(InoutError::NoSource)?;

        let path = match (source, &*materialized) {
            (Source::File(path), _) | (_, Some(path)) => return Ok(path.clone()),
            (Source::Value(value), None) => {
                self.materialize(SourceKind::Value, |out| out.write_all(&value.to_bytes()))?
            }
            (Source::Stream(reader), None) => self.materialize(SourceKind::Stream, |out| {
                io::copy(&mut *reader.lock(), out).map(|_| ())
            })?,
        };
        *materialized = Some(path.clone());
        Ok(path)
    }

    /// Return the datum as a readable stream.
    ///
    /// The handle is not locked while the stream is alive.
    pub fn stream(&self) -> Result<HandleStream> {
        let state = self.state.lock();
        match state.source.as_ref().ok_or(InoutError::NoSource)? {
            Source::File(path) => {
                let file = File::open(path).map_err(|e| InoutError::filesystem(path, e))?;
                Ok(HandleStream::File(BufReader::new(file)))
            }
            Source::Value(value) => {
                Ok(HandleStream::Memory(Cursor::new(value.to_bytes().into_owned())))
            }
            Source::Stream(reader) => Ok(HandleStream::Source(Arc::clone(reader))),
        }
    }

    /// Memory objects are reserved and not supported.
    pub fn memory_object(&self) -> Result<&(dyn Any + Send)> {
        Err(InoutError::not_implemented(
            "memory object representation is not supported",
        ))
    }

    /// Base64 encoding of the raw bytes, whatever the content mode.
    pub fn base64(&self) -> Result<String> {
        let state = self.state.lock();
        let source = state.source.as_ref().ok_or(InoutError::NoSource)?;
        Ok(BASE64.encode(source.read_bytes()?))
    }

    /// Path of the file materialized from the current source, if any.
    pub fn materialized_file(&self) -> Option<PathBuf> {
        self.state.lock().materialized.clone()
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Directory that materialized files are written into.
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    /// Set the working directory, creating it and its parents if missing.
    pub fn set_workdir(&mut self, workdir: impl Into<PathBuf>) -> Result<()> {
        let workdir = workdir.into();
        if !workdir.exists() {
            fs::create_dir_all(&workdir).map_err(|e| InoutError::filesystem(&workdir, e))?;
            debug!("Created working directory {}", workdir.display());
        }
        self.workdir = Some(workdir);
        Ok(())
    }

    /// Fall back to the system temp directory.
    pub fn clear_workdir(&mut self) {
        self.workdir = None;
    }

    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    pub fn set_content_mode(&mut self, mode: ContentMode) {
        self.content_mode = mode;
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn decode(&self, bytes: Vec<u8>) -> Result<Value> {
        match self.content_mode {
            ContentMode::Binary => Ok(Value::Bytes(bytes)),
            ContentMode::Text => String::from_utf8(bytes)
                .map(Value::String)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into()),
        }
    }

    fn materialize(
        &self,
        kind: SourceKind,
        write: impl FnOnce(&mut File) -> io::Result<()>,
    ) -> Result<PathBuf> {
        let dir = self
            .workdir
            .clone()
            .unwrap_or_else(std::env::temp_dir);

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(&dir)
            .map_err(|e| InoutError::filesystem(&dir, e))?;
        write(temp.as_file_mut()).map_err(|e| InoutError::filesystem(temp.path(), e))?;

        let (_, path) = temp
            .keep()
            .map_err(|e| InoutError::filesystem(&dir, e.error))?;
        debug!(?kind, "Materialized data handle into {}", path.display());
        Ok(path)
    }
}

impl fmt::Debug for DataHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("DataHandle")
            .field("source_kind", &state.source.as_ref().map(Source::kind))
            .field("materialized", &state.materialized)
            .field("workdir", &self.workdir)
            .field("content_mode", &self.content_mode)
            .finish()
    }
}
