//! Materialized Sketch document snapshot.
//!
//! The host document model is consumed as a read-only value snapshot
//! deserialized from JSON: a tree of layers with frames, style data,
//! fixed-edge flags and symbol overrides, plus a lookup table of symbol
//! masters. The exporter never mutates the snapshot and holds no live
//! references back into the host.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::core::Frame;
use crate::error::Result;

/// One selected-page export worth of host document state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    /// Stable document identifier.
    pub id: String,
    /// Path of the source file, if the document has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Version of the Sketch application that produced the snapshot.
    pub sketch_version: String,
    /// The page the selection was taken from.
    pub page: PageSnapshot,
    /// The selected top-level layers, in selection order.
    pub selection: Vec<Layer>,
    /// Every symbol master the selection may reference, keyed by symbol id
    /// at lookup time.
    #[serde(default)]
    pub symbol_masters: Vec<Layer>,
}

impl DocumentSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Index of symbol masters by their symbol id.
    pub fn master_index(&self) -> HashMap<&str, &Layer> {
        self.symbol_masters
            .iter()
            .filter_map(|layer| layer.symbol_id().map(|id| (id, layer)))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub id: String,
    pub name: String,
}

/// A single layer of the document tree.
///
/// Kind-specific data lives in the flattened [`LayerKind`]; everything else
/// is common to all kinds and defaults to empty when the host omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub frame: Frame,
    /// Style declarations as reported natively by the layer.
    #[serde(default)]
    pub css: Vec<String>,
    #[serde(default)]
    pub style: Style,
    /// Fixed-edge flags driving resizing-constraint inference.
    #[serde(default)]
    pub fixed: FixedFlags,
    /// Whether this layer resizes its content when it is resized.
    #[serde(default)]
    pub resizes_content: bool,
    /// Children in paint order. Empty for leaf kinds.
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl Layer {
    /// The symbol id for master and instance layers.
    pub fn symbol_id(&self) -> Option<&str> {
        match &self.kind {
            LayerKind::SymbolInstance { symbol_id, .. }
            | LayerKind::SymbolMaster { symbol_id, .. } => Some(symbol_id),
            _ => None,
        }
    }
}

/// Kind tag plus kind-specific fields, matching the host's layer type tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum LayerKind {
    Text {
        #[serde(default)]
        text: String,
        /// Text-layout flag: the text box keeps its width and grows in
        /// height. Distinct from the frame-level fixed-width flag.
        #[serde(default)]
        fixed_width: bool,
    },
    ShapePath {
        shape_type: ShapeType,
        /// Host-prerendered SVG markup, used when the shape cannot stay
        /// CSS-native.
        #[serde(default)]
        svg: String,
    },
    Shape {
        #[serde(default)]
        svg: String,
    },
    Group,
    SymbolInstance {
        symbol_id: String,
        #[serde(default)]
        overrides: Vec<Override>,
    },
    SymbolMaster {
        symbol_id: String,
        #[serde(default)]
        overrides: Vec<Override>,
        #[serde(default = "default_true")]
        include_background_color_in_instance: bool,
    },
    Image {
        #[serde(default)]
        image: Option<ImageData>,
    },
    Artboard,
    /// Catch-all for layer kinds this exporter does not understand.
    #[serde(other)]
    Unknown,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Oval,
    Triangle,
    Polygon,
    Star,
    Custom,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default)]
    pub fills: Vec<Fill>,
    #[serde(default)]
    pub shadows: Vec<Shadow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub fill_type: FillType,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Bound pattern image, present only for pattern fills that carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
}

impl Fill {
    /// An enabled pattern fill with a bound image.
    pub fn is_image_fill(&self) -> bool {
        self.enabled && self.fill_type == FillType::Pattern && self.image.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum FillType {
    Color,
    Gradient,
    Pattern,
    Other,
}

impl From<String> for FillType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Color" => FillType::Color,
            "Gradient" => FillType::Gradient,
            "Pattern" => FillType::Pattern,
            _ => FillType::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub blur: f64,
    #[serde(default)]
    pub spread: f64,
}

/// Fixed-edge flags as reported by the host for one layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedFlags {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub bottom: bool,
    #[serde(default)]
    pub width: bool,
    #[serde(default)]
    pub height: bool,
}

/// A raster image resource embedded in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    /// Raw image bytes, base64-encoded in the JSON snapshot.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// A per-instance deviation from a master's default property value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Override {
    /// The layer inside the master this override targets. Absent when the
    /// host could not resolve it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_layer: Option<OverrideTarget>,
    /// Property name: stringValue, symbolID, layerStyle, textStyle,
    /// flowDestination, image, ...
    pub property: String,
    #[serde(default)]
    pub value: Value,
    /// Bound image resource for image-typed overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
    #[serde(default)]
    pub is_default: bool,
    /// `/`-separated hierarchical path of layer ids, from the master root
    /// down to the affected layer.
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideTarget {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OverrideTargetKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum OverrideTargetKind {
    Text,
    Image,
    ShapePath,
    SymbolInstance,
    Other,
}

impl From<String> for OverrideTargetKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Text" => OverrideTargetKind::Text,
            "Image" => OverrideTargetKind::Image,
            "ShapePath" => OverrideTargetKind::ShapePath,
            "SymbolInstance" => OverrideTargetKind::SymbolInstance,
            _ => OverrideTargetKind::Other,
        }
    }
}

mod base64_bytes {
    use base64ct::{Base64, Encoding};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Base64::encode_string(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Base64::decode_vec(&encoded).map_err(serde::de::Error::custom)
    }
}
