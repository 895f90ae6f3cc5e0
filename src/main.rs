//! Kiln - build-configuration resolver for front-end asset pipelines.

mod cli;
mod config;
mod core;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let project = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Resolve {
            mode,
            output,
            pretty,
        } => {
            let mode = mode.resolve();
            debug!("resolve"; "mode {} ({}={:?})", mode, core::MODE_ENV, std::env::var(core::MODE_ENV).ok());
            cli::resolve::run_resolve(&project, mode, output.as_deref(), *pretty)
        }
        Commands::Inspect { mode, paths } => {
            cli::inspect::run_inspect(&project, mode.resolve(), paths)
        }
        Commands::Validate => cli::validate::validate_project(&project),
    }
}
