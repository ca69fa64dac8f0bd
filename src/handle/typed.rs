//! Data handle for literal values with type coercion and a validator capability.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::data_handle::{DataHandle, SourceKind};
use super::stream::HandleStream;
use super::value::{LiteralType, Value};
use crate::error::{InoutError, Result};

/// Validity check over a typed handle.
///
/// Receives the whole handle so it can inspect the declared type as well as
/// the data. Implementations should be free of side effects.
pub trait Validator: Send + Sync {
    fn validate(&self, handle: &TypedDataHandle) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&TypedDataHandle) -> bool + Send + Sync,
{
    fn validate(&self, handle: &TypedDataHandle) -> bool {
        self(handle)
    }
}

/// A [`DataHandle`] whose value writes are coerced to a declared literal type.
#[derive(Default)]
pub struct TypedDataHandle {
    handle: DataHandle,
    declared_type: Option<LiteralType>,
    validator: Option<Arc<dyn Validator>>,
}

impl TypedDataHandle {
    pub fn new(declared_type: Option<LiteralType>) -> Self {
        Self {
            handle: DataHandle::new(),
            declared_type,
            validator: None,
        }
    }

    pub fn declared_type(&self) -> Option<LiteralType> {
        self.declared_type
    }

    pub fn set_declared_type(&mut self, declared_type: Option<LiteralType>) {
        self.declared_type = declared_type;
    }

    /// Declare the type by name. Unrecognized names leave values unconverted.
    pub fn set_declared_type_name(&mut self, name: &str) {
        self.declared_type = LiteralType::parse(name);
    }

    /// Store literal text, converted to the declared type when one is set.
    pub fn set_value(&mut self, text: impl AsRef<str>) -> Result<()> {
        let text = text.as_ref();
        let value = match self.declared_type {
            Some(declared) => declared.convert(text)?,
            None => Value::String(text.to_string()),
        };
        self.handle.set_value(value);
        Ok(())
    }

    /// Decode base64 text and store it through [`set_value`](Self::set_value).
    pub fn set_base64(&mut self, encoded: &str) -> Result<()> {
        let bytes = BASE64.decode(encoded.trim())?;
        let text = String::from_utf8(bytes).map_err(|e| {
            InoutError::conversion(
                self.declared_type.map_or("string", LiteralType::name),
                encoded,
                e,
            )
        })?;
        self.set_value(text)
    }

    pub fn set_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.handle.set_file(path)
    }

    pub fn set_stream<R: Read + Send + 'static>(&mut self, reader: R) {
        self.handle.set_stream(reader);
    }

    pub fn set_workdir(&mut self, workdir: impl Into<PathBuf>) -> Result<()> {
        self.handle.set_workdir(workdir)
    }

    pub fn source_kind(&self) -> Option<SourceKind> {
        self.handle.source_kind()
    }

    pub fn value(&self) -> Result<Value> {
        self.handle.value()
    }

    pub fn file(&self) -> Result<PathBuf> {
        self.handle.file()
    }

    pub fn stream(&self) -> Result<HandleStream> {
        self.handle.stream()
    }

    pub fn base64(&self) -> Result<String> {
        self.handle.base64()
    }

    /// Read-only view of the underlying handle.
    pub fn handle(&self) -> &DataHandle {
        &self.handle
    }

    pub fn validator(&self) -> Option<&Arc<dyn Validator>> {
        self.validator.as_ref()
    }

    /// Attach a validator. It is never run implicitly.
    pub fn set_validator(&mut self, validator: impl Validator + 'static) {
        self.validator = Some(Arc::new(validator));
    }

    pub fn clear_validator(&mut self) {
        self.validator = None;
    }

    /// Run the attached validator, or `None` when there is none.
    pub fn validate(&self) -> Option<bool> {
        self.validator.as_ref().map(|v| v.validate(self))
    }
}

impl fmt::Debug for TypedDataHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedDataHandle")
            .field("handle", &self.handle)
            .field("declared_type", &self.declared_type)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}
