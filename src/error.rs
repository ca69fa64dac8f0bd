//! Error types for data handles, formats and process I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InoutError>;

/// Errors raised by handles, format negotiation, storage and processing.
#[derive(Debug, Error)]
pub enum InoutError {
    /// Requested format is not in the consumer's supported set.
    #[error("Requested format {mime_type}, {encoding}, {schema} not supported")]
    InvalidParameterValue {
        mime_type: String,
        encoding: String,
        schema: String,
    },

    /// Representation or feature that is reserved but not built.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Literal text could not be parsed as the declared type.
    #[error("Cannot convert {value:?} to {data_type}: {reason}")]
    ValueConversion {
        data_type: &'static str,
        value: String,
        reason: String,
    },

    /// Working directory, temp file or storage write failure.
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read was attempted on a handle with no representation set.
    #[error("No source set on data handle")]
    NoSource,

    /// `url()` was called on an output without a storage sink.
    #[error("No storage configured for output")]
    MissingStorage,

    /// IO error while reading a stream or file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed base64 payload.
    #[error("Invalid base64 data: {0}")]
    Base64(#[from] base64::DecodeError),

    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Job submission failure reported by a job runner.
    #[error("Job submission failed: {0}")]
    Job(String),
}

impl InoutError {
    /// Create an unsupported-format error from its identifying fields.
    pub fn invalid_format(
        mime_type: impl Into<String>,
        encoding: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        Self::InvalidParameterValue {
            mime_type: mime_type.into(),
            encoding: encoding.into(),
            schema: schema.into(),
        }
    }

    /// Create a not-implemented error.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented(message.into())
    }

    /// Create a conversion error for a literal value.
    pub fn conversion(
        data_type: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::ValueConversion {
            data_type,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap an IO error with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a job submission error.
    pub fn job(message: impl Into<String>) -> Self {
        Self::Job(message.into())
    }
}
