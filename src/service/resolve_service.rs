//! Resolution service.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::cli::Format;
use crate::config::RawConfig;
use crate::domain::{ConfigResolver, DefaultConfig, PluginRegistry, ResolvedConfig};
use crate::service::adapter::FormatAdapter;

/// Exit code when the configuration fails validation.
pub const VALIDATION_EXIT_CODE: i32 = 1;

/// Service for resolving and rendering user configuration.
pub struct ResolveService {
    registry: PluginRegistry,
    defaults: DefaultConfig,
    adapter: FormatAdapter,
}

impl ResolveService {
    /// Create a new ResolveService with built-in defaults and plugins.
    pub fn new(format: Format) -> Self {
        Self::with_parts(format, PluginRegistry::builtin(), DefaultConfig::builtin())
    }

    /// Create a ResolveService with a custom registry and defaults.
    pub fn with_parts(format: Format, registry: PluginRegistry, defaults: DefaultConfig) -> Self {
        Self {
            registry,
            defaults,
            adapter: FormatAdapter::new(format),
        }
    }

    /// Resolve and print the configuration to stdout.
    ///
    /// On validation failure an error report is printed in the selected
    /// format and the process exits with [`VALIDATION_EXIT_CODE`].
    pub fn run(&self, raw: &RawConfig, with_utilities: bool) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        let resolved = match ConfigResolver::new(&self.registry).resolve(raw, &self.defaults) {
            Ok(resolved) => resolved,
            Err(e) => {
                error!(kind = e.kind().as_str(), "Resolution failed: {}", e);
                writeln!(stdout, "{}", self.adapter.format_error(&e)?)?;
                stdout.flush()?;
                process::exit(VALIDATION_EXIT_CODE);
            }
        };

        let output = self.adapter.format_output(&resolved, with_utilities)?;
        info!(
            content = resolved.content().len(),
            plugins = resolved.plugins().len(),
            "Resolved configuration written"
        );
        writeln!(stdout, "{}", output)?;

        Ok(())
    }

    /// Resolve without printing; errors carry the validation message.
    pub fn check(&self, raw: &RawConfig) -> Result<ResolvedConfig> {
        ConfigResolver::new(&self.registry)
            .resolve(raw, &self.defaults)
            .context("Invalid configuration")
    }

    /// Human-readable list of registered plugins.
    pub fn plugin_listing(&self) -> String {
        let entries = self.registry.list();
        let width = entries.iter().map(|(id, _)| id.len()).max().unwrap_or(0);

        entries
            .iter()
            .map(|(id, description)| format!("{:<width$}  {}", id, description, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_check_reports_validation_error() {
        let service = ResolveService::new(Format::Json);
        let err = service.check(&RawConfig::default()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptyContentSet)
        );
        assert!(format!("{:#}", err).contains("content must list at least one glob"));
    }

    #[test]
    fn test_check_with_custom_defaults() {
        let mut defaults = DefaultConfig::builtin();
        defaults.content = vec!["index.html".to_string()];
        let service = ResolveService::with_parts(Format::Json, PluginRegistry::empty(), defaults);

        let resolved = service.check(&RawConfig::default()).unwrap();
        assert_eq!(resolved.content(), ["index.html".to_string()]);
    }

    #[test]
    fn test_plugin_listing_aligns_descriptions() {
        let listing = ResolveService::new(Format::Json).plugin_listing();
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("@tailwindcss/aspect-ratio  Fixed"));
        let column = lines[0].find("Fixed").unwrap();
        for line in &lines {
            let (id, description) = line.split_at(column);
            assert!(id.starts_with("@tailwindcss/"));
            assert!(id.ends_with("  "));
            assert!(!description.starts_with(' '));
        }
    }
}
