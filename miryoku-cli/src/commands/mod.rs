//! Subcommand implementations

pub mod check;
pub mod info;
pub mod layers;
pub mod show;

use std::path::Path;

use anyhow::Context;
use miryoku_config::{Defect, Variant, validate_variant};
use tracing::debug;

/// Load a config file and run the full set of structural checks on it.
pub fn load_checked(path: &Path) -> anyhow::Result<(Variant, Vec<Defect>)> {
    let (variant, mut defects) = Variant::load(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    defects.extend(validate_variant(&variant));
    debug!(
        variant = %variant.name,
        layers = variant.layers.len(),
        defects = defects.len(),
        "checked config"
    );
    Ok((variant, defects))
}
