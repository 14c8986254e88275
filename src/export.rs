//! Top-level export drive.
//!
//! One call to [`export_selection`] converts the selected layers, collects
//! every transitively referenced symbol master, partitions the results
//! into reusable components versus page layers, normalizes the page
//! layers' origin, and assembles the envelope. [`write_envelope`] then
//! serializes it to `export.json` inside the export directory.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::assets::AssetStore;
use crate::convert::Exporter;
use crate::error::Result;
use crate::symbols::SymbolAccumulator;
use crate::types::document::DocumentSnapshot;
use crate::types::model::{ExportEnvelope, ExportNode, PageExport, SourceDocument};

/// Filename of the envelope inside the export directory.
pub const EXPORT_FILE_NAME: &str = "export.json";

/// The outcome of one export run.
#[derive(Debug)]
pub struct ExportReport {
    pub envelope: ExportEnvelope,
    /// Distinct content-hashed assets written to the export directory.
    pub assets_written: usize,
    /// Layers that degraded to `unknown` stubs.
    pub unknown_layers: usize,
}

/// Export the snapshot's selection into `export_dir`.
///
/// The directory is created if needed; image assets are written as a side
/// effect. The envelope itself is only returned, not written, so a failed
/// run never leaves a partial `export.json` behind.
pub fn export_selection(doc: &DocumentSnapshot, export_dir: &Path) -> Result<ExportReport> {
    let assets = AssetStore::new(export_dir)?;
    let mut exporter = Exporter::new(doc, assets);

    tracing::debug!(
        "exporting {} selected layer(s) from page '{}'",
        doc.selection.len(),
        doc.page.name
    );

    let mut converted = Vec::with_capacity(doc.selection.len());
    for layer in &doc.selection {
        converted.push(exporter.convert_layer(layer, None)?);
    }

    let mut acc = SymbolAccumulator::default();
    for layer in &doc.selection {
        exporter.collect_symbols(layer, &mut acc)?;
    }

    // Directly selected components (artboards, masters) join the collected
    // symbol masters; everything else stays on the page.
    let (selected_components, mut page_layers): (Vec<_>, Vec<_>) =
        converted.into_iter().partition(ExportNode::is_component);

    let mut components = acc.into_components();
    components.extend(selected_components);

    normalize_origin(&mut page_layers);

    let unknown_layers = count_unknown(&components) + count_unknown(&page_layers);

    let pages = if page_layers.is_empty() {
        None
    } else {
        Some(vec![PageExport {
            name: doc.page.name.clone(),
            id: doc.page.id.clone(),
            layers: page_layers,
        }])
    };

    let envelope = ExportEnvelope::new(
        SourceDocument {
            id: doc.id.clone(),
            path: doc.path.clone(),
        },
        doc.sketch_version.clone(),
        components,
        pages,
    );

    Ok(ExportReport {
        envelope,
        assets_written: exporter.assets().asset_count(),
        unknown_layers,
    })
}

/// Translate the page-layer set so its minimum x/y is zero.
///
/// Components keep their own local origins and must not be passed here.
/// Stub nodes have no frame and are ignored; an empty (or all-stub) list
/// is a no-op.
pub fn normalize_origin(layers: &mut [ExportNode]) {
    let Some(min_x) = layers
        .iter()
        .filter_map(ExportNode::frame)
        .map(|f| f.x)
        .reduce(f64::min)
    else {
        return;
    };
    let min_y = layers
        .iter()
        .filter_map(ExportNode::frame)
        .map(|f| f.y)
        .reduce(f64::min)
        .unwrap_or(0.0);

    for layer in layers {
        if let Some(frame) = layer.frame_mut() {
            *frame = frame.translated(-min_x, -min_y);
        }
    }
}

/// Number of `unknown` stubs in the forest, including nested ones.
pub fn count_unknown(nodes: &[ExportNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            ExportNode::Unknown => 1,
            ExportNode::Group(group) => count_unknown(&group.layers),
            ExportNode::Component(component) => count_unknown(&component.layers),
            _ => 0,
        })
        .sum()
}

/// Serialize the envelope as UTF-8 JSON to `export.json` in `dir`.
pub fn write_envelope(envelope: &ExportEnvelope, dir: &Path, pretty: bool) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let file = File::create(&path)?;
    let writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(writer, envelope)?;
    } else {
        serde_json::to_writer(writer, envelope)?;
    }
    tracing::debug!("wrote envelope to {}", path.display());
    Ok(path)
}

/// A fresh, process-unique export directory under `root` (or the system
/// temp directory). The directory itself is not created here.
pub fn resolve_export_dir(root: Option<&Path>) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let base = root
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir);
    base.join(format!("noodl-export-{}-{timestamp}", std::process::id()))
}

/// The URL the downstream tool is invoked with to pick up the export.
pub fn handoff_url(export_dir: &Path) -> String {
    format!("noodl:externaltoolimport/file://{}", export_dir.display())
}
