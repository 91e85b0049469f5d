//! Projection of one layer onto the split physical key diagram.
//!
//! Finger keys are three rows of five per hand; the thumb row carries two
//! physical keys plus one combined (combo) key per hand. This is the data a
//! renderer or inspector consumes; no drawing happens here.

use serde::Serialize;

use crate::access::{AccessMap, ActiveThumbs, access_summary, active_thumbs};
use crate::error::{ConfigError, ConfigResult};
use crate::variant::{Layer, Variant};

/// The thumb row spans indices 30-39; a grid projection needs everything up
/// to the right combined key at index 37.
pub const MIN_GRID_BINDINGS: usize = 38;

/// One hand's thumb keys with their access highlight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThumbKeys {
    /// Outer and inner physical key for the left hand, inner and outer for
    /// the right
    pub physical: [Option<String>; 2],
    pub combined: Option<String>,
}

/// One layer projected onto the physical diagram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayerGrid {
    pub name: String,
    pub left_rows: [[Option<String>; 5]; 3],
    pub right_rows: [[Option<String>; 5]; 3],
    pub left_thumbs: ThumbKeys,
    pub right_thumbs: ThumbKeys,
    pub active: ActiveThumbs,
    pub access: String,
}

/// Build the grid projection of one layer.
pub fn build_layer_grid(
    variant: &Variant,
    layer: &Layer,
    base: &AccessMap,
    cross: &AccessMap,
) -> ConfigResult<LayerGrid> {
    if layer.bindings.len() < MIN_GRID_BINDINGS {
        return Err(ConfigError::TooFewBindings {
            variant: variant.name.clone(),
            layer: layer.name.clone(),
            found: layer.bindings.len(),
            required: MIN_GRID_BINDINGS,
        });
    }

    let label = |index: usize| -> Option<String> { layer.bindings[index].label() };
    let row = |start: usize| -> [Option<String>; 5] {
        [
            label(start),
            label(start + 1),
            label(start + 2),
            label(start + 3),
            label(start + 4),
        ]
    };

    Ok(LayerGrid {
        name: layer.name.clone(),
        left_rows: [row(0), row(10), row(20)],
        right_rows: [row(5), row(15), row(25)],
        left_thumbs: ThumbKeys {
            physical: [label(33), label(34)],
            combined: label(32),
        },
        right_thumbs: ThumbKeys {
            physical: [label(35), label(36)],
            combined: label(37),
        },
        active: active_thumbs(&layer.name, base, cross),
        access: access_summary(&layer.name, base),
    })
}
