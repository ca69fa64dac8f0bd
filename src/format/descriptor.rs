//! Complex data format descriptor.
//!
//! A [`Format`] names a media type together with an optional encoding and
//! schema. Two formats are the same when those three fields match; the file
//! extension, binary flag and validator are descriptive only.

use std::fmt;
use std::sync::Arc;

use quick_xml::events::BytesStart;

use crate::error::Result;
use crate::handle::DataHandle;
use crate::xml;

/// Format-specific content check.
///
/// Returns `None` when the validator cannot decide.
pub trait ContentValidator: Send + Sync {
    fn validate(&self, handle: &DataHandle, content: &[u8]) -> Option<bool>;
}

impl<F> ContentValidator for F
where
    F: Fn(&DataHandle, &[u8]) -> Option<bool> + Send + Sync,
{
    fn validate(&self, handle: &DataHandle, content: &[u8]) -> Option<bool> {
        self(handle, content)
    }
}

/// Data format of a complex input or output.
#[derive(Clone, Default)]
pub struct Format {
    mime_type: String,
    encoding: String,
    schema: String,
    extension: String,
    binary: bool,
    validator: Option<Arc<dyn ContentValidator>>,
}

impl Format {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            ..Self::default()
        }
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Mark payloads of this format as binary so handles keep raw bytes.
    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn ContentValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Encoding, empty when unset.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Schema reference, empty when unset.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn is_binary(&self) -> bool {
        self.binary
    }

    pub fn validator(&self) -> Option<&Arc<dyn ContentValidator>> {
        self.validator.as_ref()
    }

    pub fn set_validator(&mut self, validator: Option<Arc<dyn ContentValidator>>) {
        self.validator = validator;
    }

    /// True iff mime type, encoding and schema are pairwise equal.
    pub fn same_as(&self, other: &Format) -> bool {
        self.mime_type == other.mime_type
            && self.encoding == other.encoding
            && self.schema == other.schema
    }

    /// Run the content validator if one is attached.
    pub fn validate_content(&self, handle: &DataHandle, content: &[u8]) -> Option<bool> {
        self.validator
            .as_ref()
            .and_then(|v| v.validate(handle, content))
    }

    /// `<Format>` element for describe responses.
    ///
    /// `Encoding` and `Schema` children are left out when empty.
    pub fn describe_xml(&self) -> Result<String> {
        xml::fragment(|w| {
            xml::start(w, BytesStart::new("Format"))?;
            xml::text_element(w, BytesStart::new("MimeType"), &self.mime_type)?;
            if !self.encoding.is_empty() {
                xml::text_element(w, BytesStart::new("Encoding"), &self.encoding)?;
            }
            if !self.schema.is_empty() {
                xml::text_element(w, BytesStart::new("Schema"), &self.schema)?;
            }
            xml::end(w, "Format")
        })
    }
}

impl PartialEq for Format {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Format {}

impl fmt::Debug for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Format")
            .field("mime_type", &self.mime_type)
            .field("encoding", &self.encoding)
            .field("schema", &self.schema)
            .field("extension", &self.extension)
            .field("binary", &self.binary)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.mime_type, self.encoding, self.schema)
    }
}
