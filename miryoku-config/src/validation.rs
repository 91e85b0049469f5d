//! Structural validation of a parsed variant.
//!
//! All invariant checks are collected here:
//! 1. Every layer binds exactly the variant's key count of positions.
//! 2. Every layer reference names a layer defined in the same variant.
//! 3. Positions the base layer reserves as not present stay inert in every
//!    other layer.
//!
//! Checks are collected rather than fail-fast so one run reports every
//! defect with its variant, layer and position.

use std::collections::HashSet;

use miryoku_types::KeyAction;

use crate::error::Defect;
use crate::variant::{BASE_LAYER, Variant};

/// Run every structural check. An empty result means the variant is
/// well-formed.
pub fn validate_variant(variant: &Variant) -> Vec<Defect> {
    let mut defects = Vec::new();
    check_binding_counts(variant, &mut defects);
    check_layer_references(variant, &mut defects);
    check_reserved_positions(variant, &mut defects);
    defects
}

fn check_binding_counts(variant: &Variant, defects: &mut Vec<Defect>) {
    for layer in &variant.layers {
        if layer.bindings.len() != variant.key_count {
            defects.push(Defect::BindingCountMismatch {
                variant: variant.name.clone(),
                layer: layer.name.clone(),
                expected: variant.key_count,
                found: layer.bindings.len(),
            });
        }
    }
}

fn check_layer_references(variant: &Variant, defects: &mut Vec<Defect>) {
    let defined: HashSet<&str> = variant.layer_names().collect();
    for layer in &variant.layers {
        for (position, action) in layer.bindings.iter().enumerate() {
            if let Some(target) = action.layer_target() {
                if !defined.contains(target.name()) {
                    defects.push(Defect::DanglingLayerRef {
                        variant: variant.name.clone(),
                        layer: layer.name.clone(),
                        position,
                        target: target.name().to_string(),
                    });
                }
            }
        }
    }
}

/// The base layer's `U_NP` mask is the variant's declaration of unused
/// positions; other layers may keep them `U_NP` or inert, but must not bind
/// an action there.
fn check_reserved_positions(variant: &Variant, defects: &mut Vec<Defect>) {
    let Some(base) = variant.base() else {
        return;
    };
    let reserved: Vec<usize> = base
        .bindings
        .iter()
        .enumerate()
        .filter(|(_, action)| action.is_not_present())
        .map(|(position, _)| position)
        .collect();

    for layer in &variant.layers {
        if layer.name == BASE_LAYER {
            continue;
        }
        for &position in &reserved {
            let Some(action) = layer.bindings.get(position) else {
                continue; // length mismatch already reported
            };
            if is_active(action) {
                defects.push(Defect::ReservedPositionBound {
                    variant: variant.name.clone(),
                    layer: layer.name.clone(),
                    position,
                });
            }
        }
    }
}

fn is_active(action: &KeyAction) -> bool {
    !matches!(
        action,
        KeyAction::NotPresent | KeyAction::NoAction | KeyAction::Transparent
    )
}
