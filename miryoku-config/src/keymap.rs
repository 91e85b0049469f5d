//! Parsing of layer binding lists into [`KeyAction`]s.
//!
//! A layer definition is one comma-separated sequence of tokens. Splitting
//! happens at top-level commas only, so the arguments of `U_MT(...)` and
//! `U_LT(...)` stay attached to their token. Each entry is then matched
//! against the pest grammar in `keymap.pest`.

use std::str::FromStr;

use miryoku_types::{
    ClipboardAction, KeyAction, KeyCode, LayerRef, Modifier, MouseAction, MouseDirection,
    RgbAction, SystemAction,
};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "keymap.pest"]
struct BindingParser;

/// Split a layer definition at top-level commas, respecting parentheses.
/// Entries are trimmed; empty entries are dropped.
pub fn split_bindings(definition: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in definition.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let entry = definition[start..i].trim();
                if !entry.is_empty() {
                    entries.push(entry);
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    let tail = definition[start..].trim();
    if !tail.is_empty() {
        entries.push(tail);
    }

    entries
}

/// Parse one binding token into a [`KeyAction`].
///
/// The returned error is a human-readable description of why the token does
/// not match the action grammar; the caller attaches variant, layer and
/// position context.
pub fn parse_binding(token: &str) -> Result<KeyAction, String> {
    let mut pairs = BindingParser::parse(Rule::single_binding, token)
        .map_err(|e| format!("does not match any action token: {}", e.variant.message()))?;
    let single = pairs
        .next()
        .ok_or_else(|| "empty binding".to_string())?;

    for pair in single.into_inner() {
        let action = match pair.as_rule() {
            Rule::not_present => KeyAction::NotPresent,
            Rule::no_action => KeyAction::NoAction,
            Rule::transparent => KeyAction::Transparent,
            Rule::bootloader => KeyAction::System(SystemAction::Bootloader),
            Rule::out_toggle => KeyAction::System(SystemAction::OutputToggle),
            Rule::bt_clear => KeyAction::System(SystemAction::BtClear),
            Rule::ep_toggle => KeyAction::System(SystemAction::ExternalPowerToggle),
            Rule::bt_select => {
                let slot = parse_trailing_number(pair.as_str(), "&u_bt_sel_")?;
                KeyAction::System(SystemAction::BtSelect(slot))
            }
            Rule::rgb_action => {
                let suffix = strip(pair.as_str(), "U_RGB_");
                let rgb = RgbAction::from_str(suffix)
                    .map_err(|_| format!("unknown RGB action '{}'", suffix))?;
                KeyAction::System(SystemAction::Rgb(rgb))
            }
            Rule::mouse_button => {
                let button = parse_trailing_number(pair.as_str(), "U_BTN")?;
                KeyAction::Mouse(MouseAction::Button(button))
            }
            Rule::mouse_move => {
                KeyAction::Mouse(MouseAction::Move(direction_of(pair.as_str(), "U_MS_")?))
            }
            Rule::mouse_wheel => {
                KeyAction::Mouse(MouseAction::Wheel(direction_of(pair.as_str(), "U_WH_")?))
            }
            Rule::clipboard => {
                let suffix = strip(pair.as_str(), "U_");
                let clip = ClipboardAction::from_str(suffix)
                    .map_err(|_| format!("unknown clipboard action '{}'", suffix))?;
                KeyAction::Clipboard(clip)
            }
            Rule::key_press => KeyAction::Key(keycode_of(pair)?),
            Rule::mod_tap => {
                let mut inner = pair.into_inner();
                let modifier_pair = inner.next().ok_or("U_MT: missing modifier")?;
                let modifier = Modifier::from_str(modifier_pair.as_str())
                    .map_err(|_| format!("unknown modifier '{}'", modifier_pair.as_str()))?;
                let tap = inner.next().ok_or("U_MT: missing tap key")?;
                KeyAction::ModTap(modifier, KeyCode::new(tap.as_str()))
            }
            Rule::layer_tap => {
                let mut inner = pair.into_inner();
                let layer_pair = inner.next().ok_or("U_LT: missing layer")?;
                let tap = inner.next().ok_or("U_LT: missing tap key")?;
                KeyAction::LayerTap(layer_ref_of(&layer_pair), KeyCode::new(tap.as_str()))
            }
            Rule::to_layer => KeyAction::ToLayer(single_layer_arg(pair)?),
            Rule::momentary => KeyAction::Momentary(single_layer_arg(pair)?),
            Rule::toggle => KeyAction::Toggle(single_layer_arg(pair)?),
            Rule::EOI => continue,
            other => return Err(format!("unexpected rule {:?}", other)),
        };
        return Ok(action);
    }

    Err("empty binding".to_string())
}

fn strip<'a>(token: &'a str, prefix: &str) -> &'a str {
    token.strip_prefix(prefix).unwrap_or(token)
}

fn parse_trailing_number(token: &str, prefix: &str) -> Result<u8, String> {
    strip(token, prefix)
        .parse::<u8>()
        .map_err(|e| format!("invalid number in '{}': {}", token, e))
}

fn direction_of(token: &str, prefix: &str) -> Result<MouseDirection, String> {
    MouseDirection::from_str(strip(token, prefix))
        .map_err(|_| format!("unknown direction in '{}'", token))
}

fn layer_ref_of(pair: &Pair<'_, Rule>) -> LayerRef {
    LayerRef::new(strip(pair.as_str(), "U_"))
}

fn single_layer_arg(pair: Pair<'_, Rule>) -> Result<LayerRef, String> {
    let token = pair.as_str().to_string();
    pair.into_inner()
        .find(|p| p.as_rule() == Rule::layer_ref)
        .map(|p| layer_ref_of(&p))
        .ok_or_else(|| format!("missing layer argument in '{}'", token))
}

fn keycode_of(pair: Pair<'_, Rule>) -> Result<KeyCode, String> {
    let token = pair.as_str().to_string();
    pair.into_inner()
        .find(|p| p.as_rule() == Rule::keycode)
        .map(|p| KeyCode::new(p.as_str()))
        .ok_or_else(|| format!("missing keycode in '{}'", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_simple() {
        assert_eq!(split_bindings("A, B, C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn split_respects_nested_parens() {
        assert_eq!(split_bindings("U_MT(A, B), C"), vec!["U_MT(A, B)", "C"]);
        assert_eq!(
            split_bindings("U_LT(U_NAV, U_MT(X, Y)), Z"),
            vec!["U_LT(U_NAV, U_MT(X, Y))", "Z"]
        );
    }

    #[test]
    fn split_empty_and_whitespace() {
        assert!(split_bindings("").is_empty());
        assert_eq!(split_bindings("  A  ,  B  "), vec!["A", "B"]);
        assert_eq!(split_bindings("&kp Q"), vec!["&kp Q"]);
    }

    #[test]
    fn parse_plain_key() {
        assert_eq!(
            parse_binding("&kp Q").unwrap(),
            KeyAction::Key(KeyCode::new("Q"))
        );
        assert_eq!(
            parse_binding("&kp C_VOL_UP").unwrap(),
            KeyAction::Key(KeyCode::new("C_VOL_UP"))
        );
    }

    #[test]
    fn parse_placeholders() {
        assert_eq!(parse_binding("U_NP").unwrap(), KeyAction::NotPresent);
        assert_eq!(parse_binding("U_NA").unwrap(), KeyAction::NoAction);
        assert_eq!(parse_binding("&none").unwrap(), KeyAction::NoAction);
        assert_eq!(parse_binding("&trans").unwrap(), KeyAction::Transparent);
    }

    #[test]
    fn parse_mod_tap() {
        assert_eq!(
            parse_binding("U_MT(LCTRL, A)").unwrap(),
            KeyAction::ModTap(Modifier::LCtrl, KeyCode::new("A"))
        );
        // tolerant of spacing
        assert_eq!(
            parse_binding("U_MT( LSHFT , F )").unwrap(),
            KeyAction::ModTap(Modifier::LShift, KeyCode::new("F"))
        );
    }

    #[test]
    fn parse_layer_tap_strips_layer_prefix() {
        assert_eq!(
            parse_binding("U_LT(U_NAV, ESC)").unwrap(),
            KeyAction::LayerTap(LayerRef::new("NAV"), KeyCode::new("ESC"))
        );
    }

    #[test]
    fn parse_layer_tap_with_kp_prefixed_key() {
        assert_eq!(
            parse_binding("U_LT(U_NAV, &kp TAB)").unwrap(),
            KeyAction::LayerTap(LayerRef::new("NAV"), KeyCode::new("TAB"))
        );
    }

    #[test]
    fn parse_layer_switches() {
        assert_eq!(
            parse_binding("&u_to_U_TAP").unwrap(),
            KeyAction::ToLayer(LayerRef::new("TAP"))
        );
        assert_eq!(
            parse_binding("&to U_TAP").unwrap(),
            KeyAction::ToLayer(LayerRef::new("TAP"))
        );
        assert_eq!(
            parse_binding("&mo U_NAV").unwrap(),
            KeyAction::Momentary(LayerRef::new("NAV"))
        );
        assert_eq!(
            parse_binding("&tog U_NUM").unwrap(),
            KeyAction::Toggle(LayerRef::new("NUM"))
        );
    }

    #[test]
    fn parse_system_actions() {
        assert_eq!(
            parse_binding("U_BOOT").unwrap(),
            KeyAction::System(SystemAction::Bootloader)
        );
        assert_eq!(
            parse_binding("&u_out_tog").unwrap(),
            KeyAction::System(SystemAction::OutputToggle)
        );
        assert_eq!(
            parse_binding("&u_bt_sel_2").unwrap(),
            KeyAction::System(SystemAction::BtSelect(2))
        );
        assert_eq!(
            parse_binding("&u_bt_clr").unwrap(),
            KeyAction::System(SystemAction::BtClear)
        );
        assert_eq!(
            parse_binding("U_EP_TOG").unwrap(),
            KeyAction::System(SystemAction::ExternalPowerToggle)
        );
        assert_eq!(
            parse_binding("U_RGB_HUI").unwrap(),
            KeyAction::System(SystemAction::Rgb(RgbAction::Hue))
        );
    }

    #[test]
    fn parse_mouse_and_clipboard() {
        assert_eq!(
            parse_binding("U_BTN1").unwrap(),
            KeyAction::Mouse(MouseAction::Button(1))
        );
        assert_eq!(
            parse_binding("U_MS_L").unwrap(),
            KeyAction::Mouse(MouseAction::Move(MouseDirection::Left))
        );
        assert_eq!(
            parse_binding("U_WH_U").unwrap(),
            KeyAction::Mouse(MouseAction::Wheel(MouseDirection::Up))
        );
        assert_eq!(
            parse_binding("U_CPY").unwrap(),
            KeyAction::Clipboard(ClipboardAction::Copy)
        );
    }

    #[test]
    fn glued_prefixes_are_rejected() {
        assert!(parse_binding("&kpQ").is_err());
        assert!(parse_binding("&toU_TAP").is_err());
        assert!(parse_binding("&moU_NAV").is_err());
        assert!(parse_binding("&togU_NUM").is_err());
        // the `&u_to_*` spelling is a single glued token
        assert!(parse_binding("&u_to_U_TAP").is_ok());
        assert!(parse_binding("&kp\tQ").is_ok());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(parse_binding("U_XYZZY").is_err());
        assert!(parse_binding("&kp").is_err());
        assert!(parse_binding("U_MT(LCTRL)").is_err());
        assert!(parse_binding("U_MT(HYPER, A)").is_err());
        assert!(parse_binding("U_RGB_XYZ").is_err());
        assert!(parse_binding("U_NPX").is_err());
        assert!(parse_binding("U_LT(NAV, ESC)").is_err());
    }
}
