//! Well-known complex data formats.
//!
//! Based on the OGC WPS best-practice list of widely supported formats.
//! Call [`init_catalog`] once during startup before relying on
//! extension-based lookups in the [`registry`](super::registry).

use std::sync::{Arc, Once};

use tracing::debug;

use super::descriptor::{ContentValidator, Format};
use super::registry::media_types;

/// Mime type of the sentinel returned for unknown catalog names.
pub const UNKNOWN_MIME_TYPE: &str = "None";

/// Static description of a catalog format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDefinition {
    /// Catalog key, e.g. `"GEOJSON"`.
    pub name: &'static str,
    pub mime_type: &'static str,
    /// File extension including the leading dot.
    pub extension: &'static str,
    pub schema: Option<&'static str>,
    pub binary: bool,
}

impl FormatDefinition {
    const fn text(name: &'static str, mime_type: &'static str, extension: &'static str) -> Self {
        Self {
            name,
            mime_type,
            extension,
            schema: None,
            binary: false,
        }
    }

    const fn binary(name: &'static str, mime_type: &'static str, extension: &'static str) -> Self {
        Self {
            binary: true,
            ..Self::text(name, mime_type, extension)
        }
    }

    /// Build a [`Format`] from this definition.
    pub fn to_format(&self) -> Format {
        let format = Format::new(self.mime_type)
            .with_extension(self.extension)
            .with_binary(self.binary);
        match self.schema {
            Some(schema) => format.with_schema(schema),
            None => format,
        }
    }
}

impl From<&FormatDefinition> for Format {
    fn from(definition: &FormatDefinition) -> Self {
        definition.to_format()
    }
}

pub const GEOJSON: FormatDefinition =
    FormatDefinition::text("GEOJSON", "application/vnd.geo+json", ".geojson");
pub const JSON: FormatDefinition = FormatDefinition::text("JSON", "application/json", ".json");
pub const SHP: FormatDefinition =
    FormatDefinition::binary("SHP", "application/x-zipped-shp", ".zip");
pub const GML: FormatDefinition = FormatDefinition::text("GML", "application/gml+xml", ".gml");
pub const GEOTIFF: FormatDefinition =
    FormatDefinition::binary("GEOTIFF", "image/tiff; subtype=geotiff", ".tiff");
/// Unversioned WCS keeps the historical `xogc` spelling that existing clients send.
pub const WCS: FormatDefinition = FormatDefinition::text("WCS", "application/xogc-wcs", ".xml");
pub const WCS100: FormatDefinition =
    FormatDefinition::text("WCS100", "application/x-ogc-wcs; version=1.0.0", ".xml");
pub const WCS110: FormatDefinition =
    FormatDefinition::text("WCS110", "application/x-ogc-wcs; version=1.1.0", ".xml");
pub const WCS20: FormatDefinition =
    FormatDefinition::text("WCS20", "application/x-ogc-wcs; version=2.0", ".xml");
pub const WFS: FormatDefinition = FormatDefinition::text("WFS", "application/x-ogc-wfs", ".xml");
pub const WFS100: FormatDefinition =
    FormatDefinition::text("WFS100", "application/x-ogc-wfs; version=1.0.0", ".xml");
pub const WFS110: FormatDefinition =
    FormatDefinition::text("WFS110", "application/x-ogc-wfs; version=1.1.0", ".xml");
pub const WFS20: FormatDefinition =
    FormatDefinition::text("WFS20", "application/x-ogc-wfs; version=2.0", ".xml");
pub const WMS: FormatDefinition = FormatDefinition::text("WMS", "application/x-ogc-wms", ".xml");
pub const WMS130: FormatDefinition =
    FormatDefinition::text("WMS130", "application/x-ogc-wms; version=1.3.0", ".xml");
pub const WMS110: FormatDefinition =
    FormatDefinition::text("WMS110", "application/x-ogc-wms; version=1.1.0", ".xml");
pub const WMS100: FormatDefinition =
    FormatDefinition::text("WMS100", "application/x-ogc-wms; version=1.0.0", ".xml");

/// Every catalog entry, in catalog order.
pub const FORMATS: &[FormatDefinition] = &[
    GEOJSON, JSON, SHP, GML, GEOTIFF, WCS, WCS100, WCS110, WCS20, WFS, WFS100, WFS110, WFS20,
    WMS, WMS130, WMS110, WMS100,
];

static REGISTER: Once = Once::new();

/// Register every catalog `(mime type, extension)` pair with the process-wide
/// media type registry. Only the first call does any work.
pub fn init_catalog() {
    REGISTER.call_once(|| {
        let mut registry = media_types().write();
        for definition in FORMATS {
            registry.register(definition.mime_type, definition.extension);
        }
        debug!("Registered {} catalog formats", FORMATS.len());
    });
}

/// Look up a catalog entry by its case-sensitive name.
pub fn find_definition(name: &str) -> Option<&'static FormatDefinition> {
    FORMATS.iter().find(|definition| definition.name == name)
}

/// Catalog format named `name` with `validator` attached.
///
/// Unknown names yield a format whose mime type is `"None"` rather than an error.
pub fn get_format(name: &str, validator: Option<Arc<dyn ContentValidator>>) -> Format {
    let mut format = match find_definition(name) {
        Some(definition) => definition.to_format(),
        None => Format::new(UNKNOWN_MIME_TYPE),
    };
    format.set_validator(validator);
    format
}
