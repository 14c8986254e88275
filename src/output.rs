//! Versioned CLI output types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ErrorPayload;

/// Version tag of the CLI's own JSON output (distinct from the envelope
/// version inside `export.json`).
pub const NEXP_OUTPUT_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum NexpOutput {
    Export(ExportSummary),
    Error(ErrorOutput),
}

/// Summary of a successful export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub version: String,
    pub export_dir: PathBuf,
    pub export_file: PathBuf,
    /// URL the downstream tool is invoked with to pick up the export.
    pub handoff_url: String,
    pub component_count: usize,
    pub page_layer_count: usize,
    pub asset_count: usize,
    pub unknown_layer_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}
