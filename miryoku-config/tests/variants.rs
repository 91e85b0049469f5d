//! End-to-end parsing and validation of real `custom_config.h` fixtures.

use std::path::PathBuf;

use miryoku_config::{Defect, Variant, validate_variant};
use miryoku_config::access::{access_summary, base_access, cross_layer_access};
use miryoku_config::grid::build_layer_grid;
use miryoku_types::{KeyAction, KeyCode, PhysicalLayout};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load(name: &str) -> (Variant, Vec<Defect>) {
    let (variant, mut defects) = Variant::load(&fixture(name)).unwrap();
    defects.extend(validate_variant(&variant));
    (variant, defects)
}

#[test]
fn minimal_fixture_is_clean() {
    let (variant, defects) = load("minimal.h");
    assert!(defects.is_empty(), "unexpected defects: {defects:?}");
    assert_eq!(variant.name, "minimal");
    assert_eq!(variant.layout, PhysicalLayout::Keys40);
    assert_eq!(variant.key_count, 40);
    assert_eq!(
        variant.layer_names().collect::<Vec<_>>(),
        vec!["BASE", "TAP", "NAV", "NUM"]
    );
}

#[test]
fn minimal_fixture_positional_correspondence() {
    let (variant, _) = load("minimal.h");
    // position 0 is the top-left key in every layer; Q in BASE and TAP
    let base = variant.base().unwrap();
    let tap = variant.layer("TAP").unwrap();
    assert_eq!(base.bindings[0], KeyAction::Key(KeyCode::new("Q")));
    assert_eq!(tap.bindings[0], KeyAction::Key(KeyCode::new("Q")));
    for layer in &variant.layers {
        assert_eq!(layer.bindings.len(), variant.key_count);
    }
}

#[test]
fn minimal_fixture_access() {
    let (variant, _) = load("minimal.h");
    let base = base_access(&variant);
    let cross = cross_layer_access(&variant);

    // U_LT(U_NAV, ESC) sits at index 32, the left combined thumb
    assert_eq!(access_summary("NAV", &base), "left combined");
    assert_eq!(access_summary("NUM", &base), "left outer");
    // TAP is reached by &u_to_U_TAP from NAV and NUM
    let tap = &cross["TAP"];
    assert_eq!(tap.len(), 2);
    let sources: Vec<_> = tap.iter().filter_map(|a| a.source_layer.as_deref()).collect();
    assert_eq!(sources, vec!["NAV", "NUM"]);
}

#[test]
fn corne_fixture_reports_dangling_extra_references() {
    let (variant, defects) = load("corne_40key.h");
    assert_eq!(variant.layers.len(), 9);
    assert_eq!(variant.flags.len(), 1);
    assert_eq!(variant.flags[0].name, "CLIPBOARD_MAC");

    // This config kept &u_to_U_EXTRA switches but dropped the EXTRA layer
    assert_eq!(defects.len(), 6, "defects: {defects:?}");
    assert!(defects.iter().all(|d| matches!(
        d,
        Defect::DanglingLayerRef { target, .. } if target == "EXTRA"
    )));
    let layers: Vec<_> = defects
        .iter()
        .map(|d| match d {
            Defect::DanglingLayerRef { layer, .. } => layer.as_str(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(layers, vec!["NAV", "MOUSE", "MEDIA", "NUM", "SYM", "FUN"]);
}

#[test]
fn corne_fixture_parses_system_and_mouse_layers() {
    let (variant, _) = load("corne_40key.h");
    let media = variant.layer("MEDIA").unwrap();
    assert!(media.bindings.iter().any(|a| matches!(
        a,
        KeyAction::System(miryoku_types::SystemAction::BtSelect(3))
    )));
    let mouse = variant.layer("MOUSE").unwrap();
    assert!(mouse
        .bindings
        .iter()
        .any(|a| matches!(a, KeyAction::Mouse(_))));
    let button = variant.layer("BUTTON").unwrap();
    assert!(button
        .bindings
        .iter()
        .any(|a| matches!(a, KeyAction::Clipboard(_))));
}

#[test]
fn edge_cases_fixture_reports_both_dangling_targets() {
    let (_, defects) = load("edge_cases.h");
    assert_eq!(defects.len(), 2, "defects: {defects:?}");
    assert!(defects.iter().any(|d| matches!(
        d,
        Defect::DanglingLayerRef { layer, position: 19, target, .. }
            if layer == "BASE" && target == "NUM"
    )));
    assert!(defects.iter().any(|d| matches!(
        d,
        Defect::DanglingLayerRef { layer, position: 34, target, .. }
            if layer == "BASE" && target == "BUTTON"
    )));
}

#[test]
fn with_extra_fixture_lacks_referenced_layers() {
    let (variant, defects) = load("with_extra.h");
    assert_eq!(
        variant.layer_names().collect::<Vec<_>>(),
        vec!["BASE", "EXTRA", "TAP"]
    );
    // BASE and EXTRA both reference NAV and NUM, neither is defined
    assert_eq!(defects.len(), 4, "defects: {defects:?}");
    assert!(defects
        .iter()
        .all(|d| matches!(d, Defect::DanglingLayerRef { .. })));
}

#[test]
fn grids_build_for_every_layer_of_clean_fixture() {
    let (variant, _) = load("minimal.h");
    let base = base_access(&variant);
    let cross = cross_layer_access(&variant);
    for layer in &variant.layers {
        build_layer_grid(&variant, layer, &base, &cross).unwrap();
    }
    let base_grid = build_layer_grid(
        &variant,
        variant.base().unwrap(),
        &base,
        &cross,
    )
    .unwrap();
    assert_eq!(base_grid.left_rows[0][0].as_deref(), Some("Q"));
    assert_eq!(base_grid.left_thumbs.combined.as_deref(), Some("ESC"));
    assert_eq!(base_grid.right_thumbs.physical[0].as_deref(), Some("BSPC"));
    let nav = build_layer_grid(
        &variant,
        variant.layer("NAV").unwrap(),
        &base,
        &cross,
    )
    .unwrap();
    assert_eq!(nav.left_rows[1][0].as_deref(), Some("LCTRL"));
    assert_eq!(nav.right_rows[1][0].as_deref(), Some("←"));
}

#[test]
fn reparsing_a_fixture_is_idempotent() {
    let (a, _) = load("corne_40key.h");
    let (b, _) = load("corne_40key.h");
    assert_eq!(a, b);
}
