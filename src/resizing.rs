//! Resizing-constraint inference.

use crate::types::document::FixedFlags;
use crate::types::model::Resizing;

/// Derive a layer's resizing constraints from its own fixed-edge flags and
/// its immediate parent's content-resize behavior.
///
/// The flags map across directly, with one adjustment: inside a parent that
/// does not resize its content, an unfixed dimension means the layer
/// stretches to fill, so both opposing pins are forced on. No other layer
/// in the tree affects the result.
pub fn infer_resizing(fixed: &FixedFlags, parent_resizes_content: Option<bool>) -> Resizing {
    let mut resizing = Resizing {
        pin_left: fixed.left,
        pin_right: fixed.right,
        pin_top: fixed.top,
        pin_bottom: fixed.bottom,
        fixed_width: fixed.width,
        fixed_height: fixed.height,
    };

    if parent_resizes_content == Some(false) {
        if !fixed.width {
            resizing.pin_left = true;
            resizing.pin_right = true;
        }
        if !fixed.height {
            resizing.pin_top = true;
            resizing.pin_bottom = true;
        }
    }

    resizing
}
