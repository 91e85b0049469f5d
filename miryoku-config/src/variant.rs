//! Assembly of one configuration file into a [`Variant`].
//!
//! A variant is one `custom_config.h`: an independent keyboard configuration
//! owning its own layer set, key count and option flags. Parsing recovers
//! from malformed tokens (the position keeps a `NoAction` binding so later
//! structural checks stay positional) and reports them as defects.

use std::fs;
use std::path::Path;

use miryoku_types::{KeyAction, PhysicalLayout};
use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, Defect};
use crate::header::{self, RawFlag};
use crate::keymap;

pub const BASE_LAYER: &str = "BASE";

/// One named layer: an ordered binding per physical position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub name: String,
    pub bindings: Vec<KeyAction>,
}

/// A non-layer `MIRYOKU_*` option flag carried by the variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariantFlag {
    pub name: String,
    pub value: Option<String>,
}

impl From<RawFlag> for VariantFlag {
    fn from(raw: RawFlag) -> Self {
        Self {
            name: raw.name,
            value: raw.value,
        }
    }
}

/// A complete keyboard configuration unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub name: String,
    pub layout: PhysicalLayout,
    /// The base layer's binding count; every layer must match it
    pub key_count: usize,
    /// Layers in definition order
    pub layers: Vec<Layer>,
    pub flags: Vec<VariantFlag>,
}

impl Variant {
    /// Parse a header source into a variant, collecting token defects.
    pub fn parse(name: &str, content: &str) -> ConfigResult<(Self, Vec<Defect>)> {
        let header = header::parse_header(content);
        if header.layers.is_empty() {
            return Err(ConfigError::NoLayers {
                variant: name.to_string(),
            });
        }

        let mut defects = Vec::new();
        let mut layers = Vec::with_capacity(header.layers.len());
        for raw in &header.layers {
            let mut bindings = Vec::new();
            for (position, token) in keymap::split_bindings(&raw.definition).iter().enumerate() {
                match keymap::parse_binding(token) {
                    Ok(action) => bindings.push(action),
                    Err(message) => {
                        defects.push(Defect::MalformedToken {
                            variant: name.to_string(),
                            layer: raw.name.clone(),
                            position,
                            token: token.to_string(),
                            message,
                        });
                        // keep the sequence positional
                        bindings.push(KeyAction::NoAction);
                    }
                }
            }
            debug!(layer = %raw.name, bindings = bindings.len(), "parsed layer");
            layers.push(Layer {
                name: raw.name.clone(),
                bindings,
            });
        }

        let key_count = layers
            .iter()
            .find(|l| l.name == BASE_LAYER)
            .map(|l| l.bindings.len())
            .ok_or_else(|| ConfigError::MissingBaseLayer {
                variant: name.to_string(),
            })?;

        let variant = Variant {
            name: name.to_string(),
            layout: PhysicalLayout::detect(key_count),
            key_count,
            layers,
            flags: header.flags.into_iter().map(VariantFlag::from).collect(),
        };
        Ok((variant, defects))
    }

    /// Read and parse a `custom_config.h`. The variant is named after the
    /// file stem.
    pub fn load(path: &Path) -> ConfigResult<(Self, Vec<Defect>)> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::parse(&name, &content)
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn base(&self) -> Option<&Layer> {
        self.layer(BASE_LAYER)
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name.as_str())
    }

    pub fn has_layer(&self, name: &str) -> bool {
        self.layer(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use miryoku_types::{KeyCode, LayerRef, Modifier};

    use super::*;

    const TINY: &str = "\
#define MIRYOKU_LAYER_BASE \\
&kp Q, U_MT(LCTRL, A), U_LT(U_NAV, ESC), U_NP

#define MIRYOKU_LAYER_NAV \\
U_BOOT, U_NA, U_NA, U_NP
";

    #[test]
    fn parses_layers_in_order() {
        let (variant, defects) = Variant::parse("tiny", TINY).unwrap();
        assert!(defects.is_empty());
        assert_eq!(variant.layer_names().collect::<Vec<_>>(), vec!["BASE", "NAV"]);
        assert_eq!(variant.key_count, 4);
        assert_eq!(variant.layout, PhysicalLayout::Keys34);
    }

    #[test]
    fn base_bindings_are_typed() {
        let (variant, _) = Variant::parse("tiny", TINY).unwrap();
        let base = variant.base().unwrap();
        assert_eq!(base.bindings[0], KeyAction::Key(KeyCode::new("Q")));
        assert_eq!(
            base.bindings[1],
            KeyAction::ModTap(Modifier::LCtrl, KeyCode::new("A"))
        );
        assert_eq!(
            base.bindings[2],
            KeyAction::LayerTap(LayerRef::new("NAV"), KeyCode::new("ESC"))
        );
        assert_eq!(base.bindings[3], KeyAction::NotPresent);
    }

    #[test]
    fn missing_base_layer_is_fatal() {
        let err = Variant::parse("x", "#define MIRYOKU_LAYER_NAV U_NA\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseLayer { .. }));
    }

    #[test]
    fn no_layers_is_fatal() {
        let err = Variant::parse("x", "// nothing here\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoLayers { .. }));
    }

    #[test]
    fn malformed_token_is_reported_and_position_kept() {
        let src = "#define MIRYOKU_LAYER_BASE &kp Q, U_BOGUS, &kp E\n";
        let (variant, defects) = Variant::parse("x", src).unwrap();
        assert_eq!(defects.len(), 1);
        assert!(matches!(
            &defects[0],
            Defect::MalformedToken { layer, position: 1, token, .. }
                if layer == "BASE" && token == "U_BOGUS"
        ));
        let base = variant.base().unwrap();
        assert_eq!(base.bindings.len(), 3);
        assert_eq!(base.bindings[1], KeyAction::NoAction);
        assert_eq!(base.bindings[2], KeyAction::Key(KeyCode::new("E")));
    }

    #[test]
    fn reparsing_yields_identical_variant() {
        let (a, _) = Variant::parse("tiny", TINY).unwrap();
        let (b, _) = Variant::parse("tiny", TINY).unwrap();
        assert_eq!(a, b);
    }
}
