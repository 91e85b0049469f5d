//! Check command implementation

use crate::cli::CheckArgs;

/// Run check command. Returns the process exit code: 0 when every config is
/// clean, 1 when any config has structural defects.
pub fn run(args: CheckArgs) -> anyhow::Result<i32> {
    let mut total = 0usize;
    for path in &args.configs {
        let (variant, defects) = super::load_checked(path)?;

        if defects.is_empty() {
            println!(
                "{}: OK ({} layers, {} keys, {})",
                variant.name,
                variant.layers.len(),
                variant.key_count,
                variant.layout
            );
            continue;
        }

        for defect in &defects {
            println!("{defect}");
        }
        println!(
            "{}: {} defect{} found",
            variant.name,
            defects.len(),
            if defects.len() == 1 { "" } else { "s" }
        );
        total += defects.len();
    }

    Ok(if total == 0 { 0 } else { 1 })
}
