//! Bounding box inputs and outputs.

use std::path::PathBuf;

use super::identity::{Identity, impl_described};
use crate::error::Result;
use crate::handle::{DataHandle, TypedDataHandle};

/// CRS used when none is given.
pub const DEFAULT_CRS: &str = "epsg:4326";

/// CRS-qualified extent. Coordinate lengths are not checked against `dimensions`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    /// Supported reference systems; never empty.
    pub crss: Vec<String>,
    pub crs: String,
    pub dimensions: u32,
    pub lower_left: Vec<f64>,
    pub upper_right: Vec<f64>,
}

impl BoundingBox {
    /// An empty list of reference systems falls back to [`DEFAULT_CRS`].
    pub fn new(crss: Vec<String>, dimensions: Option<u32>) -> Self {
        let crss = if crss.is_empty() {
            vec![DEFAULT_CRS.to_string()]
        } else {
            crss
        };
        Self {
            crs: crss[0].clone(),
            crss,
            dimensions: dimensions.unwrap_or(2),
            lower_left: Vec::new(),
            upper_right: Vec::new(),
        }
    }

    pub fn set_corners(&mut self, lower_left: Vec<f64>, upper_right: Vec<f64>) {
        self.lower_left = lower_left;
        self.upper_right = upper_right;
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

/// Bounding box process input.
#[derive(Debug)]
pub struct BBoxInput {
    identity: Identity,
    bbox: BoundingBox,
    handle: DataHandle,
}

impl BBoxInput {
    pub fn new(identity: impl Into<Identity>, crss: Vec<String>, dimensions: Option<u32>) -> Self {
        Self {
            identity: identity.into(),
            bbox: BoundingBox::new(crss, dimensions),
            handle: DataHandle::new(),
        }
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Result<Self> {
        self.handle.set_workdir(workdir)?;
        Ok(self)
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn bbox_mut(&mut self) -> &mut BoundingBox {
        &mut self.bbox
    }

    pub fn handle(&self) -> &DataHandle {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut DataHandle {
        &mut self.handle
    }
}

/// Bounding box process output.
#[derive(Debug)]
pub struct BBoxOutput {
    identity: Identity,
    bbox: BoundingBox,
    handle: TypedDataHandle,
}

impl BBoxOutput {
    pub fn new(identity: impl Into<Identity>, crss: Vec<String>, dimensions: Option<u32>) -> Self {
        Self {
            identity: identity.into(),
            bbox: BoundingBox::new(crss, dimensions),
            handle: TypedDataHandle::new(None),
        }
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn bbox_mut(&mut self) -> &mut BoundingBox {
        &mut self.bbox
    }

    pub fn handle(&self) -> &TypedDataHandle {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut TypedDataHandle {
        &mut self.handle
    }
}

impl_described!(BBoxInput, BBoxOutput);
