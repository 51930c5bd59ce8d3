//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Design-token configuration resolver for utility-first CSS generators
#[derive(Parser)]
#[command(
    name = "tokenwind",
    version,
    about = "Design-token configuration resolver for utility-first CSS generators",
    long_about = "Merges a user configuration over the built-in design tokens, validates \
                  content globs and plugins, and prints the generator-ready configuration."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (.toml or .json)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging to file
    #[arg(long, global = true)]
    pub debug: bool,

    /// Directory for debug log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Output format for the resolved configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// TOML
    Toml,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the configuration and print it
    Resolve {
        /// Output format
        #[arg(long, short = 'f', default_value = "json")]
        format: Format,

        /// Include utility definitions contributed by plugins
        #[arg(long, short = 'u')]
        utilities: bool,
    },
    /// Generate a starter configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate configuration file
    Check,
    /// List available plugins
    Plugins,
    /// Display version information
    Version,
}
