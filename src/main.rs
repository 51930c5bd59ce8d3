//! tokenwind: design-token configuration resolver
//!
//! A CLI tool that merges a utility-first CSS configuration over the built-in
//! design tokens, validates content globs and plugins, and prints the result.

use anyhow::Result;
use clap::Parser;

use tokenwind::cli::{Cli, Commands};
use tokenwind::config::ConfigService;
use tokenwind::domain::logger;
use tokenwind::service::ResolveService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging if debug mode
    if cli.debug {
        let log_dir = cli
            .log_dir
            .clone()
            .unwrap_or_else(ConfigService::default_log_dir);
        logger::init(&log_dir)?;
    }

    // Execute command
    match cli.command {
        Commands::Resolve { format, utilities } => {
            let raw = ConfigService::load(cli.config.as_deref())?;
            ResolveService::new(format).run(&raw, utilities)?;
        }
        Commands::Init { path, force } => {
            let config_path = path.unwrap_or_else(ConfigService::default_path);
            ConfigService::generate_at(&config_path, force)?;
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            let raw = ConfigService::load(cli.config.as_deref())?;
            ResolveService::new(Default::default()).check(&raw)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Plugins => {
            println!("{}", ResolveService::new(Default::default()).plugin_listing());
        }
        Commands::Version => {
            println!("tokenwind {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
