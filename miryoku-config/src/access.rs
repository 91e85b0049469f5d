//! Layer access analysis: which key reaches which layer.
//!
//! Two sources are scanned. Dual-role `U_LT` keys on the base layer are the
//! primary access path; persistent and momentary switches on every other
//! layer (`&u_to_U_*` and friends) form the secondary, cross-layer paths.
//! The latter is how TAP is reachable even though the base layer never
//! names it.

use std::collections::BTreeMap;

use miryoku_types::{KeyAction, PositionName, ThumbPosition};
use serde::Serialize;

use crate::variant::{BASE_LAYER, Variant};

/// One way of reaching a layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessInfo {
    pub position: PositionName,
    /// Tap-key label for base-layer access, `→SOURCE` for cross-layer access
    pub key: String,
    pub index: usize,
    /// `None` when the access key sits on the base layer
    pub source_layer: Option<String>,
}

/// Target layer name -> every access path found, in scan order.
pub type AccessMap = BTreeMap<String, Vec<AccessInfo>>;

/// Scan the base layer for `U_LT` dual-role access keys.
pub fn base_access(variant: &Variant) -> AccessMap {
    let mut map = AccessMap::new();
    let Some(base) = variant.base() else {
        return map;
    };

    for (index, action) in base.bindings.iter().enumerate() {
        if let KeyAction::LayerTap(target, tap) = action {
            map.entry(target.name().to_string())
                .or_default()
                .push(AccessInfo {
                    position: PositionName::of_index(index, variant.layout),
                    key: tap.label().to_string(),
                    index,
                    source_layer: None,
                });
        }
    }
    map
}

/// Scan every non-base layer for layer-switch bindings.
pub fn cross_layer_access(variant: &Variant) -> AccessMap {
    let mut map = AccessMap::new();
    for layer in &variant.layers {
        if layer.name == BASE_LAYER {
            continue;
        }
        for (index, action) in layer.bindings.iter().enumerate() {
            let target = match action {
                KeyAction::ToLayer(t) | KeyAction::Momentary(t) | KeyAction::Toggle(t) => t,
                _ => continue,
            };
            map.entry(target.name().to_string())
                .or_default()
                .push(AccessInfo {
                    position: PositionName::of_index(index, variant.layout),
                    key: format!("→{}", layer.name),
                    index,
                    source_layer: Some(layer.name.clone()),
                });
        }
    }
    map
}

/// Human-readable access summary for a layer, position-based: positions stay
/// correct when the user swaps individual tap keys.
pub fn access_summary(layer_name: &str, base: &AccessMap) -> String {
    if layer_name == "TAP" {
        return "→TAP from other layers".to_string();
    }

    let Some(entries) = base.get(layer_name) else {
        return "Access unknown".to_string();
    };

    if let [single] = entries.as_slice() {
        return single.position.describe();
    }

    // Prefer thumb positions when several keys reach the layer
    let thumbs: Vec<String> = entries
        .iter()
        .filter(|info| info.position.as_thumb().is_some())
        .map(|info| info.position.describe())
        .collect();
    let positions = if thumbs.is_empty() {
        entries.iter().map(|info| info.position.describe()).collect()
    } else {
        thumbs
    };
    positions.join(" / ")
}

/// Which thumb key of a hand is the access key for a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbHighlight {
    /// The combined (combo) thumb key
    Combined,
    /// Index into the hand's physical thumb keys, innermost-first on the
    /// right hand
    Key(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ActiveThumbs {
    pub left: Option<ThumbHighlight>,
    pub right: Option<ThumbHighlight>,
}

/// Determine which thumb keys access a layer. TAP is reached from other
/// layers, so its access keys come from the cross-layer map.
pub fn active_thumbs(layer_name: &str, base: &AccessMap, cross: &AccessMap) -> ActiveThumbs {
    let entries = if layer_name == "TAP" {
        cross.get(layer_name)
    } else {
        base.get(layer_name)
    };
    let Some(entries) = entries else {
        return ActiveThumbs::default();
    };

    let mut active = ActiveThumbs::default();
    for info in entries {
        let Some(thumb) = info.position.as_thumb() else {
            continue;
        };
        let highlight = match thumb {
            ThumbPosition::LeftCombined | ThumbPosition::RightCombined => {
                ThumbHighlight::Combined
            }
            ThumbPosition::LeftOuter | ThumbPosition::RightInner => ThumbHighlight::Key(0),
            ThumbPosition::LeftInner | ThumbPosition::RightOuter => ThumbHighlight::Key(1),
        };
        if thumb.is_left() {
            active.left = Some(highlight);
        } else {
            active.right = Some(highlight);
        }
    }
    active
}
