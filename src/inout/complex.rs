//! Complex inputs and outputs: structured payloads described by a [`Format`].

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use super::identity::{Identity, impl_described};
use super::storage::StorageSink;
use crate::error::{InoutError, Result};
use crate::format::{Format, FormatNegotiator};
use crate::handle::{ContentMode, DataHandle};

/// Copy the active format's binary flag into the handle.
fn sync_content_mode(negotiator: &FormatNegotiator, handle: &mut DataHandle) {
    if let Some(format) = negotiator.active_format() {
        let mode = if format.is_binary() {
            ContentMode::Binary
        } else {
            ContentMode::Text
        };
        handle.set_content_mode(mode);
    }
}

/// Complex process input.
#[derive(Debug)]
pub struct ComplexInput {
    identity: Identity,
    negotiator: FormatNegotiator,
    handle: DataHandle,
}

impl ComplexInput {
    /// The first supported format is active until another is negotiated.
    pub fn new(identity: impl Into<Identity>, supported_formats: Vec<Format>) -> Self {
        let mut input = Self {
            identity: identity.into(),
            negotiator: FormatNegotiator::new(supported_formats),
            handle: DataHandle::new(),
        };
        sync_content_mode(&input.negotiator, &mut input.handle);
        input
    }

    pub fn with_data_format(mut self, format: Format) -> Result<Self> {
        self.set_data_format(format)?;
        Ok(self)
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Result<Self> {
        self.handle.set_workdir(workdir)?;
        Ok(self)
    }

    /// Negotiate `format` against the supported formats.
    pub fn set_data_format(&mut self, format: Format) -> Result<()> {
        self.negotiator.set_active_format(format)?;
        sync_content_mode(&self.negotiator, &mut self.handle);
        Ok(())
    }

    pub fn data_format(&self) -> Option<&Format> {
        self.negotiator.active_format()
    }

    pub fn supported_formats(&self) -> &[Format] {
        self.negotiator.supported_formats()
    }

    pub fn handle(&self) -> &DataHandle {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut DataHandle {
        &mut self.handle
    }
}

/// Complex process output with an optional storage sink.
pub struct ComplexOutput {
    identity: Identity,
    negotiator: FormatNegotiator,
    handle: DataHandle,
    storage: Option<Arc<dyn StorageSink>>,
}

impl ComplexOutput {
    pub fn new(identity: impl Into<Identity>, supported_formats: Vec<Format>) -> Self {
        let mut output = Self {
            identity: identity.into(),
            negotiator: FormatNegotiator::new(supported_formats),
            handle: DataHandle::new(),
            storage: None,
        };
        sync_content_mode(&output.negotiator, &mut output.handle);
        output
    }

    pub fn with_data_format(mut self, format: Format) -> Result<Self> {
        self.set_data_format(format)?;
        Ok(self)
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Result<Self> {
        self.handle.set_workdir(workdir)?;
        Ok(self)
    }

    pub fn with_storage(mut self, storage: Arc<dyn StorageSink>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn set_data_format(&mut self, format: Format) -> Result<()> {
        self.negotiator.set_active_format(format)?;
        sync_content_mode(&self.negotiator, &mut self.handle);
        Ok(())
    }

    pub fn data_format(&self) -> Option<&Format> {
        self.negotiator.active_format()
    }

    pub fn supported_formats(&self) -> &[Format] {
        self.negotiator.supported_formats()
    }

    pub fn storage(&self) -> Option<&Arc<dyn StorageSink>> {
        self.storage.as_ref()
    }

    pub fn set_storage(&mut self, storage: Option<Arc<dyn StorageSink>>) {
        self.storage = storage;
    }

    /// Store the output and return the URL it can be fetched from.
    pub fn url(&self) -> Result<String> {
        let storage = self.storage.as_ref().ok_or(InoutError::MissingStorage)?;
        let stored = storage.store(&self.handle)?;
        Ok(stored.url)
    }

    pub fn handle(&self) -> &DataHandle {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut DataHandle {
        &mut self.handle
    }
}

impl fmt::Debug for ComplexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplexOutput")
            .field("identity", &self.identity)
            .field("negotiator", &self.negotiator)
            .field("handle", &self.handle)
            .field("has_storage", &self.storage.is_some())
            .finish()
    }
}

impl_described!(ComplexInput, ComplexOutput);
