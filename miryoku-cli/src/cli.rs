//! CLI definitions using clap derive API

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Miryoku layout inspector
///
/// Parse, validate and inspect Miryoku `custom_config.h` layout tables.
#[derive(Parser, Debug)]
#[command(
    name = "miryoku",
    author,
    version,
    about = "Inspector for Miryoku ZMK custom_config.h files",
    after_help = "Examples:\n    \
                  miryoku check custom_config.h\n    \
                  miryoku layers custom_config.h\n    \
                  miryoku show custom_config.h --layer NAV\n    \
                  miryoku info custom_config.h --json"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a config and report structural defects
    Check(CheckArgs),

    /// List layers with their key counts and access paths
    Layers(LayersArgs),

    /// Render layer grids as text
    Show(ShowArgs),

    /// Summarize a config, optionally as JSON
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// One or more custom_config.h files
    #[arg(required = true)]
    pub configs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct LayersArgs {
    /// Path to a custom_config.h file
    pub config: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to a custom_config.h file
    pub config: PathBuf,

    /// Render only this layer (all layers when omitted)
    #[arg(long, value_name = "NAME")]
    pub layer: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to a custom_config.h file
    pub config: PathBuf,

    /// Emit machine readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}
