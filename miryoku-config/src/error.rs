//! Unified error and defect types.
//!
//! Hard errors ([`ConfigError`]) abort processing: an unreadable file, a
//! header with no layer tables at all. Structural problems inside an
//! otherwise readable configuration are [`Defect`]s and are collected, so one
//! check run reports every problem with its variant, layer and position.

use serde::Serialize;
use thiserror::Error;

/// Fatal configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {message}")]
    FileRead { path: String, message: String },

    #[error("variant '{variant}': no MIRYOKU_LAYER_* definitions found")]
    NoLayers { variant: String },

    #[error("variant '{variant}': MIRYOKU_LAYER_BASE is not defined")]
    MissingBaseLayer { variant: String },

    #[error(
        "variant '{variant}': layer '{layer}' binds {found} positions, at least {required} are required for a grid projection"
    )]
    TooFewBindings {
        variant: String,
        layer: String,
        found: usize,
        required: usize,
    },

    #[error("variant '{variant}': layer '{layer}' is not defined")]
    UnknownLayer { variant: String, layer: String },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A structural defect in a layout table. Never fatal on its own; a consumer
/// decides whether any defect fails the run.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Defect {
    #[error("{variant}/{layer}: position {position}: malformed token '{token}': {message}")]
    MalformedToken {
        variant: String,
        layer: String,
        position: usize,
        token: String,
        message: String,
    },

    #[error("{variant}/{layer}: binds {found} positions, the variant's key count is {expected}")]
    BindingCountMismatch {
        variant: String,
        layer: String,
        expected: usize,
        found: usize,
    },

    #[error("{variant}/{layer}: position {position}: references undefined layer '{target}'")]
    DanglingLayerRef {
        variant: String,
        layer: String,
        position: usize,
        target: String,
    },

    #[error(
        "{variant}/{layer}: position {position}: active binding at a position the base layer reserves as not present"
    )]
    ReservedPositionBound {
        variant: String,
        layer: String,
        position: usize,
    },
}
