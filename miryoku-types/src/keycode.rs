//! ZMK keycode names, display labels and categories.
//!
//! The keycode vocabulary is open: the `&kp` token accepts any code name the
//! firmware understands, so [`KeyCode`] wraps the raw spelling and the label
//! table only covers the codes that have a nicer display form. Unknown codes
//! keep their raw spelling as label.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Display labels for ZMK keycodes.
pub static KEYCODE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! label {
        ($code:literal) => {
            m.insert($code, $code);
        };
        ($code:literal => $display:literal) => {
            m.insert($code, $display);
        };
    }

    // Letters
    label!("A");
    label!("B");
    label!("C");
    label!("D");
    label!("E");
    label!("F");
    label!("G");
    label!("H");
    label!("I");
    label!("J");
    label!("K");
    label!("L");
    label!("M");
    label!("N");
    label!("O");
    label!("P");
    label!("Q");
    label!("R");
    label!("S");
    label!("T");
    label!("U");
    label!("V");
    label!("W");
    label!("X");
    label!("Y");
    label!("Z");
    // Digits
    label!("N0" => "0");
    label!("N1" => "1");
    label!("N2" => "2");
    label!("N3" => "3");
    label!("N4" => "4");
    label!("N5" => "5");
    label!("N6" => "6");
    label!("N7" => "7");
    label!("N8" => "8");
    label!("N9" => "9");
    // Function row
    label!("F1");
    label!("F2");
    label!("F3");
    label!("F4");
    label!("F5");
    label!("F6");
    label!("F7");
    label!("F8");
    label!("F9");
    label!("F10");
    label!("F11");
    label!("F12");
    // Punctuation and symbols
    label!("SQT" => "'");
    label!("DQT" => "\"");
    label!("COMMA" => ",");
    label!("DOT" => ".");
    label!("SLASH" => "/");
    label!("BSLH" => "\\");
    label!("SEMI" => ";");
    label!("COLON" => ":");
    label!("LBKT" => "[");
    label!("RBKT" => "]");
    label!("LBRC" => "{");
    label!("RBRC" => "}");
    label!("LPAR" => "(");
    label!("RPAR" => ")");
    label!("LT" => "<");
    label!("GT" => ">");
    label!("EQUAL" => "=");
    label!("MINUS" => "-");
    label!("PLUS" => "+");
    label!("UNDER" => "_");
    label!("GRAVE" => "`");
    label!("TILDE" => "~");
    label!("EXCL" => "!");
    label!("AT" => "@");
    label!("HASH" => "#");
    label!("DLLR" => "$");
    label!("PRCNT" => "%");
    label!("CARET" => "^");
    label!("AMPS" => "&");
    label!("ASTRK" => "*");
    label!("PIPE" => "|");
    label!("QMARK" => "?");
    // Editing and whitespace
    label!("ESC");
    label!("TAB");
    label!("SPACE");
    label!("RET");
    label!("BSPC");
    label!("DEL");
    label!("INS");
    label!("CAPS");
    // Navigation
    label!("LEFT" => "←");
    label!("RIGHT" => "→");
    label!("UP" => "↑");
    label!("DOWN" => "↓");
    label!("HOME");
    label!("END");
    label!("PG_UP");
    label!("PG_DN");
    // Modifiers
    label!("LCTRL");
    label!("RCTRL");
    label!("LALT");
    label!("RALT");
    label!("LGUI");
    label!("RGUI");
    label!("LSHFT");
    label!("RSHFT");
    // System row extras
    label!("PSCRN");
    label!("SLCK");
    label!("PAUSE_BREAK");
    // Consumer controls
    label!("C_PREV" => "PREV");
    label!("C_NEXT" => "NEXT");
    label!("C_VOL_UP" => "VOL+");
    label!("C_VOL_DN" => "VOL-");
    label!("C_MUTE" => "MUTE");
    label!("C_STOP" => "STOP");
    label!("C_PP" => "PLAY");
    label!("C_BRI_UP" => "BRI+");
    label!("C_BRI_DN" => "BRI-");

    m
});

/// Functional category of a key, used by consumers to group or highlight keys.
/// Mirrors the classification the layout documentation applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCategory {
    /// Position carries nothing to display
    Empty,
    /// Layer switches and dual-role layer keys
    LayerAccess,
    /// Arrow and paging keys
    Navigation,
    /// Modifier keys, plain or held
    Modifier,
    /// Mouse buttons, movement, wheel and clipboard actions
    MouseClipboard,
    /// Editing and whitespace keys
    Editing,
    /// Consumer controls (playback, volume)
    Media,
    /// Device-level actions (bootloader, output, radio, backlight)
    System,
    /// Everything else
    Regular,
}

/// A ZMK keycode name as spelled after `&kp`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(String);

impl KeyCode {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw code name, e.g. `SQT` or `C_VOL_UP`.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether the code has an entry in the label table.
    pub fn is_known(&self) -> bool {
        KEYCODE_LABELS.contains_key(self.0.as_str())
    }

    /// Display label. Unknown codes fall back to their raw spelling.
    pub fn label(&self) -> &str {
        KEYCODE_LABELS.get(self.0.as_str()).copied().unwrap_or(&self.0)
    }

    pub fn category(&self) -> KeyCategory {
        match self.0.as_str() {
            "LEFT" | "RIGHT" | "UP" | "DOWN" | "HOME" | "END" | "PG_UP" | "PG_DN" => {
                KeyCategory::Navigation
            }
            "LCTRL" | "RCTRL" | "LALT" | "RALT" | "LGUI" | "RGUI" | "LSHFT" | "RSHFT" => {
                KeyCategory::Modifier
            }
            "ESC" | "TAB" | "SPACE" | "RET" | "BSPC" | "DEL" => KeyCategory::Editing,
            c if c.starts_with("C_") => KeyCategory::Media,
            _ => KeyCategory::Regular,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyCode {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
