//! Complex data formats and format negotiation.
//!
//! ```text
//! ┌──────────────┐   init_catalog()   ┌───────────────────┐
//! │   catalog    │ ─────────────────▶ │ MediaTypeRegistry │
//! │ GEOJSON, GML │                    │  .gml ⇄ gml+xml   │
//! └──────┬───────┘                    └───────────────────┘
//!        │ get_format()
//!        ▼
//! ┌──────────────┐   same_as()   ┌──────────────────┐
//! │    Format    │ ────────────▶ │ FormatNegotiator │
//! └──────────────┘               └──────────────────┘
//! ```

pub mod catalog;
mod descriptor;
mod negotiate;
pub mod registry;

pub use catalog::{FORMATS, FormatDefinition, get_format, init_catalog};
pub use descriptor::{ContentValidator, Format};
pub use negotiate::FormatNegotiator;
pub use registry::{MediaTypeRegistry, guess_extension, guess_mime_type, media_types};
