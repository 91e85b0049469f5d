//! Layers command implementation

use miryoku_config::BASE_LAYER;
use miryoku_config::access::{access_summary, base_access};

use crate::cli::LayersArgs;

/// Run layers command
pub fn run(args: LayersArgs) -> anyhow::Result<i32> {
    let (variant, _) = super::load_checked(&args.config)?;
    let base = base_access(&variant);

    let width = variant
        .layer_names()
        .map(str::len)
        .max()
        .unwrap_or(0);

    println!(
        "{}: {} layers, {} keys ({})",
        variant.name,
        variant.layers.len(),
        variant.key_count,
        variant.layout
    );
    for layer in &variant.layers {
        let access = if layer.name == BASE_LAYER {
            "default layer".to_string()
        } else {
            access_summary(&layer.name, &base)
        };
        println!(
            "  {:width$}  {:3} keys  {}",
            layer.name,
            layer.bindings.len(),
            access,
        );
    }
    Ok(0)
}
