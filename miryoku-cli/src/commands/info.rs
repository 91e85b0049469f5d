//! Info command implementation

use serde_json::json;

use crate::cli::InfoArgs;

/// Run info command
pub fn run(args: InfoArgs) -> anyhow::Result<i32> {
    let (variant, defects) = super::load_checked(&args.config)?;

    if args.json {
        let report = json!({
            "variant": variant,
            "defects": defects,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    println!("name:    {}", variant.name);
    println!("layout:  {}", variant.layout);
    println!("keys:    {}", variant.key_count);
    println!(
        "layers:  {}",
        variant.layer_names().collect::<Vec<_>>().join(", ")
    );
    if !variant.flags.is_empty() {
        let flags: Vec<String> = variant
            .flags
            .iter()
            .map(|flag| match &flag.value {
                Some(value) => format!("{}={}", flag.name, value),
                None => flag.name.clone(),
            })
            .collect();
        println!("flags:   {}", flags.join(", "));
    }
    println!("defects: {}", defects.len());
    Ok(0)
}
