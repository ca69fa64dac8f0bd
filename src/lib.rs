//! # wps-inout
//!
//! Data handles, format negotiation and input/output descriptions for
//! geospatial processing services.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! processing → Job descriptions, Slurm submission
//!   ↓
//! inout      → Literal, BBox and Complex inputs/outputs, storage
//!   ↓
//! format     → Format descriptors, catalog, media types, negotiation
//!   ↓
//! handle     → DataHandle, TypedDataHandle, literal values
//!   ↓
//! config     → Server, storage and processing settings
//!   ↓
//! error      → InoutError, Result
//! ```

// ============================================================================
// MODULES (dependency order: error → config → handle → format → inout → processing)
// ============================================================================

/// Error type shared by every module
pub mod error;

/// Server, storage and processing configuration
pub mod config;

/// Data handles: value, file, stream and memory-object representations
pub mod handle;

/// Format descriptors, the named format catalog and negotiation
pub mod format;

/// Process input and output entities
pub mod inout;

/// Job descriptions and batch submission
pub mod processing;

mod xml;

// Re-export commonly needed items
pub use config::Config;
pub use error::{InoutError, Result};
pub use format::catalog::{get_format, init_catalog};
pub use format::{Format, FormatNegotiator};
pub use handle::{ContentMode, DataHandle, LiteralType, SourceKind, TypedDataHandle, Value};
pub use inout::{
    BBoxInput, BBoxOutput, ComplexInput, ComplexOutput, Described, FileStorage, LiteralInput,
    LiteralOutput, StorageSink,
};
