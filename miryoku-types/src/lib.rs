//! # Miryoku layout types
//!
//! Fundamental type definitions for Miryoku ZMK layout tables.
//!
//! ## Modules
//! - [`action`] - Key actions bound to physical positions (plain keys, dual-role
//!   keys, layer switches, system and mouse actions)
//! - [`keycode`] - ZMK keycode names, display labels and key categories
//! - [`layout`] - Physical layout detection and key position naming
//!
//! ## Integration
//!
//! - **miryoku-config**: configuration parsing produces these types
//! - **miryoku-cli**: the inspector renders them

pub mod action;
pub mod keycode;
pub mod layout;

pub use action::{
    ClipboardAction, KeyAction, LayerRef, Modifier, MouseAction, MouseDirection, RgbAction,
    SystemAction,
};
pub use keycode::{KeyCategory, KeyCode};
pub use layout::{Hand, PhysicalLayout, PositionName, ThumbPosition};
