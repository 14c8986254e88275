pub mod assets;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod output;
pub mod resizing;
pub mod style;
pub mod symbols;
pub mod types;

pub use assets::{asset_filename, AssetStore};
pub use config::Config;
pub use convert::{has_image_fill, Exporter};
pub use error::{ErrorCategory, ErrorPayload, NexpError, Result};
pub use export::{
    count_unknown, export_selection, handoff_url, normalize_origin, resolve_export_dir,
    write_envelope, ExportReport, EXPORT_FILE_NAME,
};
pub use output::{ErrorOutput, ExportSummary, NexpOutput, NEXP_OUTPUT_VERSION};
pub use resizing::infer_resizing;
pub use style::{css_declarations, frame_with_shadow_offset, shadow_offset};
pub use symbols::{master_input_slot, SymbolAccumulator};
pub use types::{
    DocumentSnapshot, ExportEnvelope, ExportNode, Frame, Layer, LayerKind, Resizing,
};
