//! Literal inputs and outputs: scalar values with optional units of measure.

use std::fmt;
use std::path::PathBuf;

use quick_xml::events::BytesStart;

use super::identity::{Identity, impl_described};
use crate::error::Result;
use crate::handle::{LiteralType, TypedDataHandle};
use crate::xml;

/// OGC unit of measure URNs keyed by unit name.
const OGC_UNITS: &[(&str, &str)] = &[
    ("degree", "urn:ogc:def:uom:OGC:1.0:degree"),
    ("metre", "urn:ogc:def:uom:OGC:1.0:metre"),
    ("unity", "urn:ogc:def:uom:OGC:1.0:unity"),
];

/// Unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Uom {
    pub uom: String,
}

impl Uom {
    pub fn new(uom: impl Into<String>) -> Self {
        Self { uom: uom.into() }
    }

    /// OGC URN for this unit, if it is a known one.
    pub fn reference(&self) -> Option<&'static str> {
        OGC_UNITS
            .iter()
            .find(|(name, _)| *name == self.uom)
            .map(|(_, urn)| *urn)
    }

    /// `<ows:UOM>` element. The reference attribute is left out for unknown units.
    pub fn describe_xml(&self) -> Result<String> {
        xml::fragment(|w| {
            let mut elem = BytesStart::new("ows:UOM");
            elem.push_attribute(("xmlns:ows", xml::OWS_NAMESPACE));
            if let Some(reference) = self.reference() {
                elem.push_attribute(("ows:reference", reference));
            }
            xml::text_element(w, elem, &self.uom)
        })
    }
}

impl From<&str> for Uom {
    fn from(uom: &str) -> Self {
        Self::new(uom)
    }
}

impl fmt::Display for Uom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uom)
    }
}

/// Data type and units of a literal input or output.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralCapability {
    pub data_type: LiteralType,
    pub uoms: Vec<Uom>,
    /// Unit in use, defaults to the first of `uoms`.
    pub uom: Option<Uom>,
}

impl LiteralCapability {
    /// Missing data types default to integer.
    pub fn new(data_type: Option<LiteralType>, uoms: Vec<Uom>) -> Self {
        Self {
            data_type: data_type.unwrap_or(LiteralType::Integer),
            uom: uoms.first().cloned(),
            uoms,
        }
    }
}

impl Default for LiteralCapability {
    fn default() -> Self {
        Self::new(None, Vec::new())
    }
}

/// Literal process input.
#[derive(Debug)]
pub struct LiteralInput {
    identity: Identity,
    literal: LiteralCapability,
    handle: TypedDataHandle,
    allowed_values: Option<Vec<String>>,
}

impl LiteralInput {
    pub fn new(identity: impl Into<Identity>, data_type: Option<LiteralType>) -> Self {
        let literal = LiteralCapability::new(data_type, Vec::new());
        Self {
            identity: identity.into(),
            handle: TypedDataHandle::new(Some(literal.data_type)),
            literal,
            allowed_values: None,
        }
    }

    pub fn with_uoms(mut self, uoms: Vec<Uom>) -> Self {
        self.literal = LiteralCapability::new(Some(self.literal.data_type), uoms);
        self
    }

    pub fn with_allowed_values(mut self, allowed_values: Vec<String>) -> Self {
        self.allowed_values = Some(allowed_values);
        self
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Result<Self> {
        self.handle.set_workdir(workdir)?;
        Ok(self)
    }

    pub fn literal(&self) -> &LiteralCapability {
        &self.literal
    }

    pub fn set_uom(&mut self, uom: Option<Uom>) {
        self.literal.uom = uom;
    }

    pub fn allowed_values(&self) -> Option<&[String]> {
        self.allowed_values.as_deref()
    }

    /// True when no allowed values restrict the input.
    pub fn any_value(&self) -> bool {
        self.allowed_values.is_none()
    }

    pub fn handle(&self) -> &TypedDataHandle {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut TypedDataHandle {
        &mut self.handle
    }
}

/// Literal process output.
#[derive(Debug)]
pub struct LiteralOutput {
    identity: Identity,
    literal: LiteralCapability,
    handle: TypedDataHandle,
}

impl LiteralOutput {
    pub fn new(identity: impl Into<Identity>, data_type: Option<LiteralType>) -> Self {
        let literal = LiteralCapability::new(data_type, Vec::new());
        Self {
            identity: identity.into(),
            handle: TypedDataHandle::new(Some(literal.data_type)),
            literal,
        }
    }

    pub fn with_uoms(mut self, uoms: Vec<Uom>) -> Self {
        self.literal = LiteralCapability::new(Some(self.literal.data_type), uoms);
        self
    }

    pub fn literal(&self) -> &LiteralCapability {
        &self.literal
    }

    pub fn set_uom(&mut self, uom: Option<Uom>) {
        self.literal.uom = uom;
    }

    pub fn handle(&self) -> &TypedDataHandle {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut TypedDataHandle {
        &mut self.handle
    }
}

impl_described!(LiteralInput, LiteralOutput);
