//! Process inputs and outputs.
//!
//! Each entity is assembled from independent parts rather than inherited:
//!
//! ```text
//! LiteralInput/Output  = Identity + LiteralCapability + TypedDataHandle
//! BBoxInput            = Identity + BoundingBox       + DataHandle
//! BBoxOutput           = Identity + BoundingBox       + TypedDataHandle
//! ComplexInput         = Identity + FormatNegotiator  + DataHandle
//! ComplexOutput        = ComplexInput parts           + StorageSink
//! ```

mod bbox;
mod complex;
mod identity;
mod literal;
pub mod storage;

pub use bbox::{BBoxInput, BBoxOutput, BoundingBox, DEFAULT_CRS};
pub use complex::{ComplexInput, ComplexOutput};
pub use identity::{Described, Identity};
pub use literal::{LiteralCapability, LiteralInput, LiteralOutput, Uom};
pub use storage::{FileStorage, StorageSink, StoreKind, StoredOutput};

#[cfg(test)]
mod tests;
