//! Key actions bound to physical positions.
//!
//! [`KeyAction`] is the closed set of behaviors a Miryoku layout table can
//! bind to a key: plain presses, tap-hold dual-role keys, layer switches,
//! placeholders, and device-level actions. One `KeyAction` corresponds to one
//! token in a `MIRYOKU_LAYER_*` definition.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::keycode::{KeyCategory, KeyCode};

/// A layer referenced by name, with the `U_` prefix stripped (`U_NAV` -> `NAV`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerRef(String);

impl LayerRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Modifier held by a `U_MT` dual-role key, in ZMK spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum Modifier {
    #[strum(serialize = "LCTRL")]
    LCtrl,
    #[strum(serialize = "LALT")]
    LAlt,
    #[strum(serialize = "LGUI")]
    LGui,
    #[strum(serialize = "LSHFT")]
    LShift,
    #[strum(serialize = "RCTRL")]
    RCtrl,
    #[strum(serialize = "RALT")]
    RAlt,
    #[strum(serialize = "RGUI")]
    RGui,
    #[strum(serialize = "RSHFT")]
    RShift,
}

/// Backlight adjustments on the media layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum RgbAction {
    #[strum(serialize = "TOG")]
    Toggle,
    #[strum(serialize = "EFF")]
    Effect,
    #[strum(serialize = "HUI")]
    Hue,
    #[strum(serialize = "SAI")]
    Saturation,
    #[strum(serialize = "BRI")]
    Brightness,
    #[strum(serialize = "SPI")]
    Speed,
}

/// Device-level actions: not keystrokes, but firmware commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemAction {
    /// Enter firmware-update mode (`U_BOOT`)
    Bootloader,
    /// Toggle the active output target (`&u_out_tog`)
    OutputToggle,
    /// Select a Bluetooth profile slot (`&u_bt_sel_N`)
    BtSelect(u8),
    /// Clear the current Bluetooth profile (`&u_bt_clr`)
    BtClear,
    /// Toggle external power (`U_EP_TOG`)
    ExternalPowerToggle,
    /// RGB underglow adjustment (`U_RGB_*`)
    Rgb(RgbAction),
}

/// Mouse emulation directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum MouseDirection {
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "U")]
    Up,
    #[strum(serialize = "D")]
    Down,
}

/// Mouse emulation actions on the mouse layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseAction {
    /// `U_BTNn`, 1-based button number
    Button(u8),
    /// `U_MS_{L,R,U,D}` pointer movement
    Move(MouseDirection),
    /// `U_WH_{L,R,U,D}` wheel scrolling
    Wheel(MouseDirection),
}

/// Clipboard shortcuts, resolved by the firmware to the host convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum ClipboardAction {
    #[strum(serialize = "RDO")]
    Redo,
    #[strum(serialize = "UND")]
    Undo,
    #[strum(serialize = "PST")]
    Paste,
    #[strum(serialize = "CPY")]
    Copy,
    #[strum(serialize = "CUT")]
    Cut,
}

/// The action bound to one physical position in one layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "args", rename_all = "snake_case")]
pub enum KeyAction {
    /// `U_NP`: the position does not exist on this keyboard
    NotPresent,
    /// `U_NA` / `&none`: the position is deliberately inert in this layer
    NoAction,
    /// `&trans`: falls through to a lower layer
    Transparent,
    /// `&kp CODE`
    Key(KeyCode),
    /// `U_MT(MOD, CODE)`: CODE on tap, MOD while held
    ModTap(Modifier, KeyCode),
    /// `U_LT(U_LAYER, CODE)`: CODE on tap, LAYER while held
    LayerTap(LayerRef, KeyCode),
    /// `&mo U_LAYER`: layer active while held
    Momentary(LayerRef),
    /// `&u_to_U_LAYER` / `&to U_LAYER`: switch to layer persistently
    ToLayer(LayerRef),
    /// `&tog U_LAYER`
    Toggle(LayerRef),
    System(SystemAction),
    Mouse(MouseAction),
    Clipboard(ClipboardAction),
}

impl KeyAction {
    /// Display label for this action, `None` if the position is not present.
    ///
    /// Dual-role keys show their tap half; layer switches show the target.
    pub fn label(&self) -> Option<String> {
        match self {
            KeyAction::NotPresent => None,
            KeyAction::NoAction => Some("-".to_string()),
            KeyAction::Transparent => Some("▽".to_string()),
            KeyAction::Key(code) => Some(code.label().to_string()),
            KeyAction::ModTap(_, code) => Some(code.label().to_string()),
            KeyAction::LayerTap(_, code) => Some(code.label().to_string()),
            KeyAction::Momentary(layer) => Some(format!("MO {}", layer)),
            KeyAction::ToLayer(layer) => Some(format!("→{}", layer)),
            KeyAction::Toggle(layer) => Some(format!("TG {}", layer)),
            KeyAction::System(sys) => Some(match sys {
                SystemAction::Bootloader => "BOOT".to_string(),
                SystemAction::OutputToggle => "OUT".to_string(),
                SystemAction::BtSelect(slot) => format!("BT{}", slot),
                SystemAction::BtClear => "BTCLR".to_string(),
                SystemAction::ExternalPowerToggle => "EP".to_string(),
                SystemAction::Rgb(rgb) => format!("RGB {}", rgb),
            }),
            KeyAction::Mouse(mouse) => Some(match mouse {
                MouseAction::Button(n) => format!("BTN{}", n),
                MouseAction::Move(dir) => format!("MS {}", arrow(*dir)),
                MouseAction::Wheel(dir) => format!("WH {}", arrow(*dir)),
            }),
            KeyAction::Clipboard(clip) => Some(clip.to_string()),
        }
    }

    pub fn category(&self) -> KeyCategory {
        match self {
            KeyAction::NotPresent | KeyAction::NoAction | KeyAction::Transparent => {
                KeyCategory::Empty
            }
            KeyAction::Key(code) => code.category(),
            KeyAction::ModTap(_, _) => KeyCategory::Modifier,
            KeyAction::LayerTap(_, _)
            | KeyAction::Momentary(_)
            | KeyAction::ToLayer(_)
            | KeyAction::Toggle(_) => KeyCategory::LayerAccess,
            KeyAction::System(_) => KeyCategory::System,
            KeyAction::Mouse(_) | KeyAction::Clipboard(_) => KeyCategory::MouseClipboard,
        }
    }

    /// The layer this action references, if any.
    pub fn layer_target(&self) -> Option<&LayerRef> {
        match self {
            KeyAction::LayerTap(layer, _)
            | KeyAction::Momentary(layer)
            | KeyAction::ToLayer(layer)
            | KeyAction::Toggle(layer) => Some(layer),
            _ => None,
        }
    }

    /// Whether the position is physically absent (`U_NP`).
    pub fn is_not_present(&self) -> bool {
        matches!(self, KeyAction::NotPresent)
    }
}

fn arrow(dir: MouseDirection) -> &'static str {
    match dir {
        MouseDirection::Left => "←",
        MouseDirection::Right => "→",
        MouseDirection::Up => "↑",
        MouseDirection::Down => "↓",
    }
}
