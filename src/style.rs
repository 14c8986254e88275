//! Style extraction helpers.
//!
//! Layers report their styling as a flat, ordered list of CSS-like
//! declaration strings. The exporter passes those through mostly verbatim;
//! the only processing is prefix-based exclusion (used to suppress
//! `background-color` on masters that opt out of exposing it) and a
//! shadow-aware frame offset for SVG-rasterized shapes.

use crate::types::document::{Layer, Style};
use crate::types::Frame;

/// The layer's native style declarations, minus any declaration starting
/// with one of the excluded prefixes. Order is preserved.
pub fn css_declarations(layer: &Layer, exclude: &[&str]) -> Vec<String> {
    layer
        .css
        .iter()
        .filter(|decl| !exclude.iter().any(|prefix| decl.starts_with(prefix)))
        .cloned()
        .collect()
}

/// Origin shift needed so a rasterized export includes its shadow bleed.
///
/// Each axis is `min(0, x - blur - spread)` over the enabled shadows; a
/// shadow that only extends right/down contributes nothing.
pub fn shadow_offset(style: &Style) -> (f64, f64) {
    let mut dx = 0.0f64;
    let mut dy = 0.0f64;
    for shadow in style.shadows.iter().filter(|s| s.enabled) {
        dx = dx.min(shadow.x - shadow.blur - shadow.spread);
        dy = dy.min(shadow.y - shadow.blur - shadow.spread);
    }
    (dx, dy)
}

/// The layer's frame shifted by the shadow offset, size unchanged.
pub fn frame_with_shadow_offset(layer: &Layer) -> Frame {
    let (dx, dy) = shadow_offset(&layer.style);
    layer.frame.translated(dx, dy)
}
