//! Shared geometry types.

use serde::{Deserialize, Serialize};

/// Position and size of a layer, in document units.
///
/// Used both for snapshot input (parent-local coordinates) and for the
/// exported component model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The same frame with its origin shifted by `(dx, dy)`. Size is
    /// unchanged.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// A frame of the same size anchored at the local origin.
    pub fn at_origin(&self) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            ..*self
        }
    }
}
