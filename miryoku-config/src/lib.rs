//! Parsing and validation of Miryoku ZMK `custom_config.h` layout tables.
//!
//! A `custom_config.h` declares one keyboard variant as a set of
//! `MIRYOKU_LAYER_*` preprocessor tables, each binding an ordered sequence of
//! action tokens to physical key positions. This crate turns that text into
//! the typed model of `miryoku-types`, checks its structural invariants, and
//! derives the layer-access information a documentation tool needs.
//!
//! Pipeline: [`header`] extracts the macro tables, [`keymap`] parses binding
//! tokens, [`variant`] assembles the configuration unit, [`validation`]
//! collects structural defects, [`access`] and [`grid`] derive views.

pub mod access;
pub mod error;
pub mod grid;
pub mod header;
pub mod keymap;
pub mod validation;
pub mod variant;

pub use access::{AccessInfo, AccessMap, ActiveThumbs, ThumbHighlight};
pub use error::{ConfigError, ConfigResult, Defect};
pub use grid::{LayerGrid, ThumbKeys};
pub use validation::validate_variant;
pub use variant::{BASE_LAYER, Layer, Variant, VariantFlag};
