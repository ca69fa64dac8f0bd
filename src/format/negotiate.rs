//! Matching a requested format against a consumer's supported set.

use tracing::debug;

use super::descriptor::Format;
use crate::error::{InoutError, Result};

/// Supported formats of an input or output and the one currently in use.
///
/// The active format is either unset or [`same_as`](Format::same_as) one of
/// the supported formats.
#[derive(Debug, Clone, Default)]
pub struct FormatNegotiator {
    supported: Vec<Format>,
    active: Option<Format>,
}

impl FormatNegotiator {
    /// The first supported format becomes the active one.
    pub fn new(supported: Vec<Format>) -> Self {
        let active = supported.first().cloned();
        Self { supported, active }
    }

    /// Start from the default, then negotiate `requested` if given.
    pub fn with_format(supported: Vec<Format>, requested: Option<Format>) -> Result<Self> {
        let mut negotiator = Self::new(supported);
        if let Some(requested) = requested {
            negotiator.set_active_format(requested)?;
        }
        Ok(negotiator)
    }

    pub fn supported_formats(&self) -> &[Format] {
        &self.supported
    }

    pub fn active_format(&self) -> Option<&Format> {
        self.active.as_ref()
    }

    pub fn is_supported(&self, format: &Format) -> bool {
        self.supported.iter().any(|f| f.same_as(format))
    }

    /// Accept `requested` if it matches a supported format.
    ///
    /// The caller's instance is stored, validator included. On rejection the
    /// active format is left unchanged.
    pub fn set_active_format(&mut self, requested: Format) -> Result<()> {
        if !self.is_supported(&requested) {
            debug!("Rejected format {requested}");
            return Err(InoutError::invalid_format(
                requested.mime_type(),
                requested.encoding(),
                requested.schema(),
            ));
        }
        self.active = Some(requested);
        Ok(())
    }
}
