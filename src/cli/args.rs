//! Command-line interface definitions.

use crate::core::Mode;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Build-configuration resolver for front-end asset pipelines
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file, searched upward from the current directory (default: kiln.toml)
    ///
    /// A file named here must exist.
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Emit the configuration tree as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        mode: ModeArgs,

        /// Write the tree to a file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Summarize plugins and rules, with stages in the order they run
    #[command(visible_alias = "i")]
    Inspect {
        #[command(flatten)]
        mode: ModeArgs,

        /// Source files to look up in the rule table
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
    },

    /// Check the project layout and the rule table for conflicts
    #[command(visible_alias = "v")]
    Validate,
}

/// Mode selection shared by commands that build a tree.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Build mode (default: read from NODE_ENV; only "development" selects development)
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,
}

impl ModeArgs {
    /// CLI flag if given, otherwise the environment.
    pub fn resolve(&self) -> Mode {
        self.mode.unwrap_or_else(Mode::from_env)
    }
}
