//! Show command implementation
//!
//! Renders the five-column split grid of one or all layers as plain text,
//! with the physical and combined thumb keys below the finger rows.

use miryoku_config::grid::{LayerGrid, ThumbKeys, build_layer_grid};
use miryoku_config::access::{base_access, cross_layer_access};
use miryoku_config::{ConfigError, Layer, Variant};

use crate::cli::ShowArgs;

const CELL: usize = 7;

/// Run show command
pub fn run(args: ShowArgs) -> anyhow::Result<i32> {
    let (variant, _) = super::load_checked(&args.config)?;
    let base = base_access(&variant);
    let cross = cross_layer_access(&variant);

    let layers: Vec<&Layer> = match &args.layer {
        Some(name) => {
            let layer = variant.layer(name).ok_or_else(|| ConfigError::UnknownLayer {
                variant: variant.name.clone(),
                layer: name.clone(),
            })?;
            vec![layer]
        }
        None => variant.layers.iter().collect(),
    };

    for (i, layer) in layers.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let grid = build_layer_grid(&variant, layer, &base, &cross)?;
        render(&variant, &grid);
    }
    Ok(0)
}

fn render(variant: &Variant, grid: &LayerGrid) {
    println!("{} / {} ({})", variant.name, grid.name, grid.access);
    for row in 0..3 {
        println!(
            "  {}   {}",
            cells(&grid.left_rows[row]),
            cells(&grid.right_rows[row])
        );
    }
    println!(
        "  {:>pad$}   {}",
        thumbs(&grid.left_thumbs),
        thumbs(&grid.right_thumbs),
        pad = 5 * (CELL + 1) - 1,
    );
}

fn cells(row: &[Option<String>; 5]) -> String {
    row.iter()
        .map(|cell| format!("{:^CELL$}", cell.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn thumbs(keys: &ThumbKeys) -> String {
    let mut parts: Vec<String> = keys
        .physical
        .iter()
        .map(|key| format!("[{}]", key.as_deref().unwrap_or(" ")))
        .collect();
    if let Some(combined) = &keys.combined {
        parts.push(format!("[{combined}*]"));
    }
    parts.join(" ")
}
