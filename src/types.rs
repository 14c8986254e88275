//! Data types used throughout the exporter.
//!
//! This module is organized by domain:
//! - [`core`] - Shared geometry types (Frame)
//! - [`document`] - Materialized Sketch document snapshot (exporter input)
//! - [`model`] - Neutral component model consumed by Noodl (exporter output)

pub mod core;
pub mod document;
pub mod model;

// Re-export core types at module level for convenience
pub use core::Frame;

// Re-export document snapshot types
pub use document::{
    DocumentSnapshot, Fill, FillType, FixedFlags, ImageData, Layer, LayerKind, Override,
    OverrideTarget, OverrideTargetKind, PageSnapshot, Shadow, ShapeType, Style,
};

// Re-export component model types
pub use model::{
    ComponentInstanceNode, ComponentNode, ExportEnvelope, ExportNode, GroupNode, ImageNode,
    InputSlot, InputValue, PageExport, RectangleNode, Resizing, SizeMode, SourceDocument,
    SourceTool, SvgNode, TextNode, ENVELOPE_TYPE, ENVELOPE_VERSION, SOURCE_TOOL_NAME,
};
