//! miryoku - Miryoku layout inspector
//!
//! Parses Miryoku ZMK `custom_config.h` files, validates their layer
//! tables and renders them in terminal-friendly form.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Layers(args) => commands::layers::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Info(args) => commands::info::run(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(2);
        }
    }
}
