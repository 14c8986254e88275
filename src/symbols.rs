//! Symbol override resolution and master collection.
//!
//! Instances carry per-placement overrides; masters describe which of
//! their layers can be overridden at all. Both sides synthesize the same
//! input name, `<affectedLayerName>-<property>`, so the downstream tool
//! can wire instance values to master slots. Collection walks the whole
//! selection and pulls in every transitively referenced master exactly
//! once, which also keeps mutually referencing symbols from expanding
//! forever.

use std::collections::HashSet;

use serde_json::Value;

use crate::convert::Exporter;
use crate::error::{NexpError, Result};
use crate::types::document::{Layer, LayerKind, Override, OverrideTargetKind};
use crate::types::model::{ExportNode, InputSlot, InputValue};

/// Map a master's override to the input slot it exposes.
///
/// Only text-content and image overrides are supported; anything else
/// (nested symbols, shared styles, hotspot targets) yields no slot. For a
/// multi-segment path the override lives inside a nested symbol: the slot
/// targets the top-level nested instance and forwards by input name, on
/// the assumption the nested component exposes the same-named input.
pub fn master_input_slot(ov: &Override) -> Option<InputSlot> {
    let target = ov.affected_layer.as_ref()?;

    let target_property = match (target.kind, ov.property.as_str()) {
        (OverrideTargetKind::Text, "stringValue") => "text",
        (OverrideTargetKind::Image | OverrideTargetKind::ShapePath, "image") => "src",
        _ => return None,
    };

    let mut segments = ov.path.split('/');
    let target_id = segments.next().unwrap_or_default().to_string();
    let nested = segments.next().is_some();

    let name = format!("{}-{}", target.name, ov.property);
    let target_property = if nested {
        name.clone()
    } else {
        target_property.to_string()
    };

    Some(InputSlot {
        name,
        target_id,
        target_property,
    })
}

impl<'a> Exporter<'a> {
    /// The input slots a master exposes, one per supported override.
    pub(crate) fn master_input_slots(overrides: &[Override]) -> Vec<InputSlot> {
        overrides.iter().filter_map(master_input_slot).collect()
    }

    /// The input values an instance supplies: only explicit deviations
    /// (non-default overrides) are serialized. Image overrides are
    /// rewritten to content-hashed asset references.
    pub(crate) fn instance_input_values(
        &mut self,
        overrides: &[Override],
    ) -> Result<Vec<InputValue>> {
        let mut values = Vec::new();
        for ov in overrides.iter().filter(|ov| !ov.is_default) {
            let Some(target) = &ov.affected_layer else {
                continue;
            };
            let name = format!("{}-{}", target.name, ov.property);

            let value = if ov.property == "image" {
                match &ov.image {
                    Some(image) => Value::String(self.assets_mut().store(image)?),
                    None => {
                        tracing::warn!("image override '{name}' has no image data, dropping");
                        continue;
                    }
                }
            } else {
                ov.value.clone()
            };

            values.push(InputValue { name, value });
        }
        Ok(values)
    }

    /// Collect every distinct symbol master transitively referenced by
    /// `layer` into the accumulator, converting each on first encounter.
    ///
    /// The presence check runs before recursing into a master's children,
    /// so directly or indirectly self-referential symbols terminate.
    pub fn collect_symbols(&mut self, layer: &Layer, acc: &mut SymbolAccumulator) -> Result<()> {
        if let LayerKind::SymbolInstance { symbol_id, .. } = &layer.kind {
            if !acc.seen.contains(symbol_id.as_str()) {
                let master =
                    self.master(symbol_id)
                        .ok_or_else(|| NexpError::MissingSymbolMaster {
                            symbol_id: symbol_id.clone(),
                            instance: layer.name.clone(),
                        })?;
                acc.seen.insert(symbol_id.clone());
                let component = self.convert_layer(master, None)?;
                acc.components.push(component);
                for child in &master.layers {
                    self.collect_symbols(child, acc)?;
                }
            }
        }

        for child in &layer.layers {
            self.collect_symbols(child, acc)?;
        }
        Ok(())
    }
}

/// Symbol-dedup state for one export invocation: first occurrence wins,
/// traversal order is preserved.
#[derive(Debug, Default)]
pub struct SymbolAccumulator {
    seen: HashSet<String>,
    components: Vec<ExportNode>,
}

impl SymbolAccumulator {
    pub fn into_components(self) -> Vec<ExportNode> {
        self.components
    }
}
