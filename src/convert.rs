//! Per-kind layer conversion.
//!
//! [`Exporter`] walks the snapshot tree and turns each layer into its
//! [`ExportNode`] counterpart. Dispatch is a flat match on the layer kind;
//! unrecognized kinds degrade to the `unknown` stub with a diagnostic so a
//! single odd layer never aborts a whole-document export. The only hard
//! failure is a symbol instance whose master is missing, since no valid
//! component reference can be produced for it.

use std::collections::HashMap;

use crate::assets::AssetStore;
use crate::error::{NexpError, Result};
use crate::resizing::infer_resizing;
use crate::style::{css_declarations, frame_with_shadow_offset};
use crate::types::document::{DocumentSnapshot, ImageData, Layer, LayerKind, ShapeType};
use crate::types::model::{
    ComponentInstanceNode, ComponentNode, ExportNode, GroupNode, ImageNode, RectangleNode,
    Resizing, SizeMode, SvgNode, TextNode,
};

/// One export invocation's conversion state: the document being exported,
/// a symbol-master index, and the asset store for the export directory.
#[derive(Debug)]
pub struct Exporter<'a> {
    masters: HashMap<&'a str, &'a Layer>,
    assets: AssetStore,
}

impl<'a> Exporter<'a> {
    pub fn new(doc: &'a DocumentSnapshot, assets: AssetStore) -> Self {
        Self {
            masters: doc.master_index(),
            assets,
        }
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub(crate) fn assets_mut(&mut self) -> &mut AssetStore {
        &mut self.assets
    }

    pub(crate) fn master(&self, symbol_id: &str) -> Option<&'a Layer> {
        self.masters.get(symbol_id).copied()
    }

    /// Convert one layer. `parent` is the immediate container, used only
    /// for resizing-constraint inference.
    pub fn convert_layer(
        &mut self,
        layer: &Layer,
        parent: Option<&Layer>,
    ) -> Result<ExportNode> {
        match &layer.kind {
            LayerKind::Text { text, fixed_width } => {
                Ok(self.convert_text(layer, parent, text, *fixed_width))
            }
            LayerKind::ShapePath { shape_type, svg } => {
                self.convert_shape_path(layer, parent, *shape_type, svg)
            }
            LayerKind::Shape { svg } => Ok(self.svg_node(layer, svg)),
            LayerKind::Group => self.convert_group(layer, parent),
            LayerKind::SymbolInstance {
                symbol_id,
                overrides,
            } => self.convert_symbol_instance(layer, parent, symbol_id, overrides),
            LayerKind::SymbolMaster {
                symbol_id,
                overrides,
                include_background_color_in_instance,
            } => self.convert_symbol_master(
                layer,
                symbol_id,
                overrides,
                *include_background_color_in_instance,
            ),
            LayerKind::Image { .. } => self.convert_image(layer, parent),
            LayerKind::Artboard => self.convert_artboard(layer),
            LayerKind::Unknown => {
                tracing::warn!(
                    "unsupported layer type for '{}' ({}), exporting stub",
                    layer.name,
                    layer.id
                );
                Ok(ExportNode::Unknown)
            }
        }
    }

    fn convert_children(&mut self, parent: &Layer) -> Result<Vec<ExportNode>> {
        parent
            .layers
            .iter()
            .map(|child| self.convert_layer(child, Some(parent)))
            .collect()
    }

    fn convert_text(
        &self,
        layer: &Layer,
        parent: Option<&Layer>,
        text: &str,
        fixed_width: bool,
    ) -> ExportNode {
        let resizing = resizing_for(layer, parent);
        let size_mode = if fixed_width {
            Some(SizeMode::ContentHeight)
        } else if resizing.fixed_height {
            Some(SizeMode::Explicit)
        } else {
            None
        };

        ExportNode::Text(TextNode {
            id: layer.id.clone(),
            name: layer.name.clone(),
            frame: layer.frame,
            css: css_declarations(layer, &[]),
            text: text.to_string(),
            resizing,
            size_mode,
        })
    }

    fn convert_shape_path(
        &mut self,
        layer: &Layer,
        parent: Option<&Layer>,
        shape_type: ShapeType,
        svg: &str,
    ) -> Result<ExportNode> {
        match shape_type {
            ShapeType::Rectangle => self.convert_rectangle(layer, parent),
            ShapeType::Oval => self.convert_oval(layer, parent, svg),
            _ => Ok(self.svg_node(layer, svg)),
        }
    }

    fn convert_rectangle(
        &mut self,
        layer: &Layer,
        parent: Option<&Layer>,
    ) -> Result<ExportNode> {
        if has_image_fill(layer) {
            return self.convert_image(layer, parent);
        }

        Ok(ExportNode::Rectangle(RectangleNode {
            id: layer.id.clone(),
            name: layer.name.clone(),
            frame: layer.frame,
            css: css_declarations(layer, &[]),
            resizing: resizing_for(layer, parent),
        }))
    }

    // Ovals never stay CSS-native: with an image fill they become a
    // round-cropped image, otherwise they rasterize to SVG.
    fn convert_oval(
        &mut self,
        layer: &Layer,
        parent: Option<&Layer>,
        svg: &str,
    ) -> Result<ExportNode> {
        if has_image_fill(layer) {
            let mut node = self.convert_image(layer, parent)?;
            if let ExportNode::Image(image) = &mut node {
                let mut css = css_declarations(layer, &[]);
                css.push("border-radius: 100%;".to_string());
                image.css = Some(css);
            }
            return Ok(node);
        }

        Ok(self.svg_node(layer, svg))
    }

    fn svg_node(&self, layer: &Layer, svg: &str) -> ExportNode {
        ExportNode::Svg(SvgNode {
            id: layer.id.clone(),
            name: layer.name.clone(),
            frame: frame_with_shadow_offset(layer),
            svg: svg.to_string(),
        })
    }

    fn convert_group(&mut self, layer: &Layer, parent: Option<&Layer>) -> Result<ExportNode> {
        Ok(ExportNode::Group(GroupNode {
            id: layer.id.clone(),
            name: Some(layer.name.clone()),
            frame: layer.frame,
            css: None,
            layers: self.convert_children(layer)?,
            resizing: resizing_for(layer, parent),
        }))
    }

    fn convert_symbol_instance(
        &mut self,
        layer: &Layer,
        parent: Option<&Layer>,
        symbol_id: &str,
        overrides: &[crate::types::document::Override],
    ) -> Result<ExportNode> {
        let master = self
            .master(symbol_id)
            .ok_or_else(|| NexpError::MissingSymbolMaster {
                symbol_id: symbol_id.to_string(),
                instance: layer.name.clone(),
            })?;

        let input_values = self.instance_input_values(overrides)?;

        Ok(ExportNode::ComponentInstance(ComponentInstanceNode {
            id: layer.id.clone(),
            name: layer.name.clone(),
            frame: layer.frame,
            component_id: symbol_id.to_string(),
            component_name: master.name.clone(),
            css: css_declarations(layer, &[]),
            input_values,
            resizing: resizing_for(layer, parent),
        }))
    }

    fn convert_symbol_master(
        &mut self,
        layer: &Layer,
        symbol_id: &str,
        overrides: &[crate::types::document::Override],
        include_background_color: bool,
    ) -> Result<ExportNode> {
        let exclude: &[&str] = if include_background_color {
            &[]
        } else {
            &["background-color"]
        };

        // Masters can carry a background color, so the children are
        // wrapped in a synthetic root group that holds it.
        let root = ExportNode::Group(GroupNode {
            id: format!("{}-root", layer.id),
            name: None,
            frame: layer.frame.at_origin(),
            css: Some(css_declarations(layer, exclude)),
            layers: self.convert_children(layer)?,
            resizing: Resizing {
                fixed_width: true,
                fixed_height: true,
                ..Default::default()
            },
        });

        Ok(ExportNode::Component(ComponentNode {
            id: layer.id.clone(),
            name: layer.name.clone(),
            component_id: Some(symbol_id.to_string()),
            frame: layer.frame.at_origin(),
            layers: vec![root],
            inputs: Some(Self::master_input_slots(overrides)),
        }))
    }

    fn convert_artboard(&mut self, layer: &Layer) -> Result<ExportNode> {
        let mut css = css_declarations(layer, &[]);
        css.push("overflow: hidden;".to_string());

        let root = ExportNode::Group(GroupNode {
            id: format!("{}-root", layer.id),
            name: None,
            frame: layer.frame.at_origin(),
            css: Some(css),
            layers: self.convert_children(layer)?,
            resizing: Resizing {
                pin_left: true,
                pin_top: true,
                fixed_width: true,
                fixed_height: true,
                ..Default::default()
            },
        });

        Ok(ExportNode::Component(ComponentNode {
            id: layer.id.clone(),
            name: layer.name.clone(),
            component_id: None,
            frame: layer.frame.at_origin(),
            layers: vec![root],
            inputs: None,
        }))
    }

    fn convert_image(&mut self, layer: &Layer, parent: Option<&Layer>) -> Result<ExportNode> {
        // A layer may reference several images (direct bitmap plus pattern
        // fills); only the first is exported since a node has one src slot.
        let Some(image) = first_image(layer) else {
            tracing::warn!(
                "bitmap layer '{}' ({}) has no image data, exporting stub",
                layer.name,
                layer.id
            );
            return Ok(ExportNode::Unknown);
        };

        let src = self.assets.store(image)?;

        Ok(ExportNode::Image(ImageNode {
            id: layer.id.clone(),
            name: layer.name.clone(),
            frame: layer.frame,
            src,
            css: None,
            resizing: resizing_for(layer, parent),
            object_fit: "cover".to_string(),
        }))
    }
}

fn resizing_for(layer: &Layer, parent: Option<&Layer>) -> Resizing {
    infer_resizing(&layer.fixed, parent.map(|p| p.resizes_content))
}

/// Any enabled pattern fill with a bound image.
pub fn has_image_fill(layer: &Layer) -> bool {
    layer.style.fills.iter().any(|fill| fill.is_image_fill())
}

/// The bitmap resources a layer references: its own image (for bitmap
/// layers), then every enabled fill's image, in style order.
fn first_image(layer: &Layer) -> Option<&ImageData> {
    if let LayerKind::Image { image: Some(image) } = &layer.kind {
        return Some(image);
    }
    layer
        .style
        .fills
        .iter()
        .filter(|fill| fill.enabled)
        .find_map(|fill| fill.image.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::asset_filename;
    use crate::types::document::{
        Fill, FillType, FixedFlags, PageSnapshot, Shadow, Style,
    };
    use crate::types::Frame;
    use tempfile::TempDir;

    fn empty_doc() -> DocumentSnapshot {
        DocumentSnapshot {
            id: "doc".into(),
            path: None,
            sketch_version: "99.1".into(),
            page: PageSnapshot {
                id: "p1".into(),
                name: "Page 1".into(),
            },
            selection: Vec::new(),
            symbol_masters: Vec::new(),
        }
    }

    fn layer(id: &str, name: &str, frame: Frame, kind: LayerKind) -> Layer {
        Layer {
            id: id.into(),
            name: name.into(),
            frame,
            css: Vec::new(),
            style: Style::default(),
            fixed: FixedFlags::default(),
            resizes_content: false,
            layers: Vec::new(),
            kind,
        }
    }

    fn exporter_for<'a>(doc: &'a DocumentSnapshot, dir: &TempDir) -> Exporter<'a> {
        Exporter::new(doc, AssetStore::new(dir.path()).expect("asset store"))
    }

    fn image_fill(bytes: &[u8]) -> Fill {
        Fill {
            fill_type: FillType::Pattern,
            enabled: true,
            image: Some(ImageData {
                data: bytes.to_vec(),
            }),
        }
    }

    #[test]
    fn rectangle_without_image_fill_stays_css_native() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut rect = layer(
            "r1",
            "Card",
            Frame::new(10.0, 20.0, 100.0, 50.0),
            LayerKind::ShapePath {
                shape_type: ShapeType::Rectangle,
                svg: String::new(),
            },
        );
        rect.css = vec!["fill: #fff".into(), "opacity: 0.5".into()];

        let node = exporter.convert_layer(&rect, None).expect("convert");
        match node {
            ExportNode::Rectangle(n) => {
                assert_eq!(n.frame, Frame::new(10.0, 20.0, 100.0, 50.0));
                assert_eq!(n.css, vec!["fill: #fff".to_string(), "opacity: 0.5".to_string()]);
                assert_eq!(n.resizing, Resizing::default());
            }
            other => panic!("expected Rectangle, got {other:?}"),
        }
    }

    #[test]
    fn rectangle_with_pattern_fill_degrades_to_image() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut rect = layer(
            "r1",
            "Photo",
            Frame::new(0.0, 0.0, 64.0, 64.0),
            LayerKind::ShapePath {
                shape_type: ShapeType::Rectangle,
                svg: String::new(),
            },
        );
        rect.style.fills = vec![image_fill(b"png-bytes")];

        let node = exporter.convert_layer(&rect, None).expect("convert");
        match node {
            ExportNode::Image(n) => {
                assert_eq!(n.src, asset_filename(b"png-bytes"));
                assert_eq!(n.object_fit, "cover");
                assert!(n.css.is_none());
                assert!(dir.path().join(&n.src).exists());
            }
            other => panic!("expected Image, got {other:?}"),
        }
    }

    #[test]
    fn plain_oval_rasterizes_to_svg() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let oval = layer(
            "o1",
            "Dot",
            Frame::new(5.0, 5.0, 20.0, 20.0),
            LayerKind::ShapePath {
                shape_type: ShapeType::Oval,
                svg: "<svg/>".into(),
            },
        );

        let node = exporter.convert_layer(&oval, None).expect("convert");
        match node {
            ExportNode::Svg(n) => {
                assert_eq!(n.svg, "<svg/>");
                assert_eq!(n.frame, Frame::new(5.0, 5.0, 20.0, 20.0));
            }
            other => panic!("expected SVG, got {other:?}"),
        }
    }

    #[test]
    fn oval_with_image_fill_becomes_round_cropped_image() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut oval = layer(
            "o1",
            "Avatar",
            Frame::new(0.0, 0.0, 40.0, 40.0),
            LayerKind::ShapePath {
                shape_type: ShapeType::Oval,
                svg: String::new(),
            },
        );
        oval.css = vec!["opacity: 0.9".into()];
        oval.style.fills = vec![image_fill(b"avatar")];

        let node = exporter.convert_layer(&oval, None).expect("convert");
        match node {
            ExportNode::Image(n) => {
                assert_eq!(
                    n.css,
                    Some(vec![
                        "opacity: 0.9".to_string(),
                        "border-radius: 100%;".to_string()
                    ])
                );
            }
            other => panic!("expected Image, got {other:?}"),
        }
    }

    #[test]
    fn shape_export_includes_shadow_bleed_in_frame() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut shape = layer(
            "s1",
            "Blob",
            Frame::new(10.0, 10.0, 30.0, 30.0),
            LayerKind::Shape {
                svg: "<svg/>".into(),
            },
        );
        shape.style.shadows = vec![Shadow {
            enabled: true,
            x: -2.0,
            y: -3.0,
            blur: 1.0,
            spread: 0.0,
        }];

        let node = exporter.convert_layer(&shape, None).expect("convert");
        match node {
            ExportNode::Svg(n) => {
                assert_eq!(n.frame, Frame::new(7.0, 6.0, 30.0, 30.0));
            }
            other => panic!("expected SVG, got {other:?}"),
        }
    }

    #[test]
    fn text_size_mode_follows_layout_flags() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let grows = layer(
            "t1",
            "Title",
            Frame::new(0.0, 0.0, 120.0, 20.0),
            LayerKind::Text {
                text: "Hi".into(),
                fixed_width: true,
            },
        );
        let ExportNode::Text(node) = exporter.convert_layer(&grows, None).expect("convert") else {
            panic!("expected Text");
        };
        assert_eq!(node.size_mode, Some(SizeMode::ContentHeight));
        assert_eq!(node.text, "Hi");

        let mut explicit = layer(
            "t2",
            "Label",
            Frame::new(0.0, 0.0, 120.0, 20.0),
            LayerKind::Text {
                text: "Hello".into(),
                fixed_width: false,
            },
        );
        explicit.fixed.height = true;
        let ExportNode::Text(node) = exporter.convert_layer(&explicit, None).expect("convert")
        else {
            panic!("expected Text");
        };
        assert_eq!(node.size_mode, Some(SizeMode::Explicit));

        let free = layer(
            "t3",
            "Caption",
            Frame::new(0.0, 0.0, 120.0, 20.0),
            LayerKind::Text {
                text: "…".into(),
                fixed_width: false,
            },
        );
        let ExportNode::Text(node) = exporter.convert_layer(&free, None).expect("convert") else {
            panic!("expected Text");
        };
        assert_eq!(node.size_mode, None);
    }

    #[test]
    fn group_recurses_in_paint_order_and_constrains_children() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut group = layer(
            "g1",
            "Header",
            Frame::new(0.0, 0.0, 200.0, 60.0),
            LayerKind::Group,
        );
        // resizes_content stays false: children with unfixed dimensions
        // must come back pinned on both axes.
        group.layers = vec![
            layer(
                "c1",
                "Back",
                Frame::new(0.0, 0.0, 200.0, 60.0),
                LayerKind::ShapePath {
                    shape_type: ShapeType::Rectangle,
                    svg: String::new(),
                },
            ),
            layer(
                "c2",
                "Front",
                Frame::new(8.0, 8.0, 40.0, 40.0),
                LayerKind::Text {
                    text: "Hi".into(),
                    fixed_width: false,
                },
            ),
        ];

        let ExportNode::Group(node) = exporter.convert_layer(&group, None).expect("convert")
        else {
            panic!("expected Group");
        };
        assert_eq!(node.name.as_deref(), Some("Header"));
        assert!(node.css.is_none());
        assert_eq!(node.layers.len(), 2);
        let ExportNode::Rectangle(back) = &node.layers[0] else {
            panic!("expected Rectangle first");
        };
        assert_eq!(back.id, "c1");
        assert!(back.resizing.pin_left && back.resizing.pin_right);
        assert!(back.resizing.pin_top && back.resizing.pin_bottom);
    }

    #[test]
    fn resizing_group_leaves_child_pins_alone() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut group = layer(
            "g1",
            "Row",
            Frame::new(0.0, 0.0, 200.0, 60.0),
            LayerKind::Group,
        );
        group.resizes_content = true;
        group.layers = vec![layer(
            "c1",
            "Cell",
            Frame::new(0.0, 0.0, 50.0, 60.0),
            LayerKind::ShapePath {
                shape_type: ShapeType::Rectangle,
                svg: String::new(),
            },
        )];

        let ExportNode::Group(node) = exporter.convert_layer(&group, None).expect("convert")
        else {
            panic!("expected Group");
        };
        let ExportNode::Rectangle(cell) = &node.layers[0] else {
            panic!("expected Rectangle child");
        };
        assert_eq!(cell.resizing, Resizing::default());
    }

    #[test]
    fn unknown_layer_kind_yields_stub() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let odd = layer(
            "h1",
            "Hotspot",
            Frame::new(0.0, 0.0, 10.0, 10.0),
            LayerKind::Unknown,
        );
        assert_eq!(
            exporter.convert_layer(&odd, None).expect("convert"),
            ExportNode::Unknown
        );
    }

    #[test]
    fn bitmap_layer_without_data_degrades_to_stub() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let bitmap = layer(
            "i1",
            "Broken",
            Frame::new(0.0, 0.0, 10.0, 10.0),
            LayerKind::Image { image: None },
        );
        assert_eq!(
            exporter.convert_layer(&bitmap, None).expect("convert"),
            ExportNode::Unknown
        );
    }

    #[test]
    fn bitmap_layer_prefers_its_own_image_over_fills() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut bitmap = layer(
            "i1",
            "Photo",
            Frame::new(0.0, 0.0, 10.0, 10.0),
            LayerKind::Image {
                image: Some(ImageData {
                    data: b"direct".to_vec(),
                }),
            },
        );
        bitmap.style.fills = vec![image_fill(b"fill")];

        let ExportNode::Image(node) = exporter.convert_layer(&bitmap, None).expect("convert")
        else {
            panic!("expected Image");
        };
        assert_eq!(node.src, asset_filename(b"direct"));
    }

    #[test]
    fn missing_master_is_a_hard_error() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let instance = layer(
            "i1",
            "Button",
            Frame::new(0.0, 0.0, 80.0, 32.0),
            LayerKind::SymbolInstance {
                symbol_id: "sym-missing".into(),
                overrides: Vec::new(),
            },
        );
        let err = exporter.convert_layer(&instance, None).unwrap_err();
        assert!(matches!(err, NexpError::MissingSymbolMaster { .. }));
    }

    #[test]
    fn artboard_appends_overflow_hidden_after_native_declarations() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut artboard = layer(
            "a1",
            "Screen",
            Frame::new(100.0, 200.0, 375.0, 667.0),
            LayerKind::Artboard,
        );
        artboard.css = vec!["background-color: #fff".into()];

        let ExportNode::Component(node) = exporter.convert_layer(&artboard, None).expect("convert")
        else {
            panic!("expected Component");
        };
        assert!(node.component_id.is_none());
        assert!(node.inputs.is_none());
        assert_eq!(node.frame, Frame::new(0.0, 0.0, 375.0, 667.0));
        assert_eq!(node.layers.len(), 1);

        let ExportNode::Group(root) = &node.layers[0] else {
            panic!("expected root Group");
        };
        assert_eq!(root.id, "a1-root");
        assert!(root.name.is_none());
        assert_eq!(
            root.css,
            Some(vec![
                "background-color: #fff".to_string(),
                "overflow: hidden;".to_string()
            ])
        );
        assert!(root.resizing.pin_left && root.resizing.pin_top);
        assert!(root.resizing.fixed_width && root.resizing.fixed_height);
        assert!(!root.resizing.pin_right && !root.resizing.pin_bottom);
    }

    #[test]
    fn master_root_drops_background_color_when_opted_out() {
        let doc = empty_doc();
        let dir = TempDir::new().expect("tempdir");
        let mut exporter = exporter_for(&doc, &dir);

        let mut master = layer(
            "m1",
            "Button",
            Frame::new(0.0, 0.0, 80.0, 32.0),
            LayerKind::SymbolMaster {
                symbol_id: "sym-1".into(),
                overrides: Vec::new(),
                include_background_color_in_instance: false,
            },
        );
        master.css = vec![
            "background-color: #f00".into(),
            "border-radius: 4px".into(),
        ];

        let ExportNode::Component(node) = exporter.convert_layer(&master, None).expect("convert")
        else {
            panic!("expected Component");
        };
        assert_eq!(node.component_id.as_deref(), Some("sym-1"));
        assert_eq!(node.inputs.as_deref(), Some(&[][..]));

        let ExportNode::Group(root) = &node.layers[0] else {
            panic!("expected root Group");
        };
        assert_eq!(root.css, Some(vec!["border-radius: 4px".to_string()]));
        assert!(root.resizing.fixed_width && root.resizing.fixed_height);
        assert!(!root.resizing.pin_left);
    }
}
