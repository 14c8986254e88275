//! The neutral component model produced for Noodl.
//!
//! These types serialize to the `export.json` schema the downstream tool
//! imports: a versioned envelope holding reusable components (symbol
//! masters and artboards) and origin-normalized page layers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::core::Frame;

/// Envelope `type` tag expected by the importer.
pub const ENVELOPE_TYPE: &str = "noodl-external-tool-export";
/// Envelope schema version.
pub const ENVELOPE_VERSION: &str = "1";
/// Source tool identifier reported in the envelope.
pub const SOURCE_TOOL_NAME: &str = "sketch";

/// One exported layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportNode {
    Text(TextNode),
    Rectangle(RectangleNode),
    #[serde(rename = "SVG")]
    Svg(SvgNode),
    Group(GroupNode),
    Image(ImageNode),
    ComponentInstance(ComponentInstanceNode),
    Component(ComponentNode),
    /// Stub emitted for layer kinds the exporter does not support.
    #[serde(rename = "unknown")]
    Unknown,
}

impl ExportNode {
    /// Whether this node belongs in the envelope's `components` section.
    pub fn is_component(&self) -> bool {
        matches!(self, ExportNode::Component(_))
    }

    pub fn frame(&self) -> Option<&Frame> {
        match self {
            ExportNode::Text(n) => Some(&n.frame),
            ExportNode::Rectangle(n) => Some(&n.frame),
            ExportNode::Svg(n) => Some(&n.frame),
            ExportNode::Group(n) => Some(&n.frame),
            ExportNode::Image(n) => Some(&n.frame),
            ExportNode::ComponentInstance(n) => Some(&n.frame),
            ExportNode::Component(n) => Some(&n.frame),
            ExportNode::Unknown => None,
        }
    }

    pub fn frame_mut(&mut self) -> Option<&mut Frame> {
        match self {
            ExportNode::Text(n) => Some(&mut n.frame),
            ExportNode::Rectangle(n) => Some(&mut n.frame),
            ExportNode::Svg(n) => Some(&mut n.frame),
            ExportNode::Group(n) => Some(&mut n.frame),
            ExportNode::Image(n) => Some(&mut n.frame),
            ExportNode::ComponentInstance(n) => Some(&mut n.frame),
            ExportNode::Component(n) => Some(&mut n.frame),
            ExportNode::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub id: String,
    pub name: String,
    pub frame: Frame,
    pub css: Vec<String>,
    pub text: String,
    pub resizing: Resizing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_mode: Option<SizeMode>,
}

/// How a text layer sizes itself relative to its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeMode {
    /// Both dimensions are explicit.
    Explicit,
    /// Width is explicit, height follows the content.
    ContentHeight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleNode {
    pub id: String,
    pub name: String,
    pub frame: Frame,
    pub css: Vec<String>,
    pub resizing: Resizing,
}

/// A vector shape rasterized to SVG markup. The frame already includes any
/// shadow bleed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgNode {
    pub id: String,
    pub name: String,
    pub frame: Frame,
    pub svg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    pub id: String,
    /// Absent on the synthetic root group of a component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub frame: Frame,
    /// Plain groups carry no css; synthetic component roots do.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<Vec<String>>,
    pub layers: Vec<ExportNode>,
    pub resizing: Resizing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub id: String,
    pub name: String,
    pub frame: Frame,
    /// Content-hashed asset filename, relative to the export directory.
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<Vec<String>>,
    pub resizing: Resizing,
    pub object_fit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstanceNode {
    pub id: String,
    pub name: String,
    pub frame: Frame,
    pub component_id: String,
    pub component_name: String,
    pub css: Vec<String>,
    pub input_values: Vec<InputValue>,
    pub resizing: Resizing,
}

/// A reusable component definition: a symbol master or a top-level artboard.
///
/// `layers` holds exactly one synthetic root group wrapping the real
/// children, so component backgrounds and clipping have somewhere to live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: String,
    pub name: String,
    /// Symbol id for masters; artboards have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    pub frame: Frame,
    pub layers: Vec<ExportNode>,
    /// Override slots exposed by a master; artboards have none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<InputSlot>>,
}

/// Edge-pinning and fixed-dimension flags describing how a layer responds
/// to its container resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resizing {
    pub pin_left: bool,
    pub pin_right: bool,
    pub pin_top: bool,
    pub pin_bottom: bool,
    pub fixed_width: bool,
    pub fixed_height: bool,
}

/// A non-default override carried on a component instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    pub value: Value,
}

/// An overridable point a master exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSlot {
    pub name: String,
    pub target_id: String,
    pub target_property: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageExport {
    pub name: String,
    pub id: String,
    pub layers: Vec<ExportNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTool {
    pub name: String,
    pub version: String,
}

/// The top-level document written to `export.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub source_document: SourceDocument,
    pub source_tool: SourceTool,
    pub components: Vec<ExportNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<PageExport>>,
}

impl ExportEnvelope {
    pub fn new(
        source_document: SourceDocument,
        sketch_version: String,
        components: Vec<ExportNode>,
        pages: Option<Vec<PageExport>>,
    ) -> Self {
        Self {
            kind: ENVELOPE_TYPE.to_string(),
            version: ENVELOPE_VERSION.to_string(),
            source_document,
            source_tool: SourceTool {
                name: SOURCE_TOOL_NAME.to_string(),
                version: sketch_version,
            },
            components,
            pages,
        }
    }
}
