//! Output rendering for resolved configuration.
//!
//! Renders the generator-ready document and validation errors as:
//! - JSON (default)
//! - TOML

use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::debug;

use crate::cli::Format;
use crate::config::PluginSpec;
use crate::domain::{ResolvedConfig, Theme, Utility, ValidationError};

/// Resolved configuration as written to stdout.
#[derive(Serialize)]
struct Document<'a> {
    content: &'a [String],
    plugins: Vec<&'a PluginSpec>,
    theme: &'a Theme,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    utilities: Vec<PluginUtilities<'a>>,
}

/// Utilities contributed by one plugin.
#[derive(Serialize)]
struct PluginUtilities<'a> {
    plugin: &'a str,
    rules: Vec<Utility>,
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    message: String,
}

/// Adapter for converting internal types to the selected output format.
pub struct FormatAdapter {
    format: Format,
}

impl FormatAdapter {
    /// Create a new adapter for the specified format.
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    /// Render the resolved configuration, optionally with plugin utilities.
    pub fn format_output(&self, resolved: &ResolvedConfig, with_utilities: bool) -> Result<String> {
        let utilities = if with_utilities {
            resolved
                .plugins()
                .iter()
                .map(|p| PluginUtilities {
                    plugin: p.id(),
                    rules: p.plugin().utilities(resolved.theme()),
                })
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            format = ?self.format,
            plugins_with_utilities = utilities.len(),
            "Rendering resolved configuration"
        );

        let document = Document {
            content: resolved.content(),
            plugins: resolved.plugins().iter().map(|p| p.spec()).collect(),
            theme: resolved.theme(),
            utilities,
        };
        self.render(&document)
    }

    /// Render a validation error as a machine-readable report.
    pub fn format_error(&self, error: &ValidationError) -> Result<String> {
        let report = ErrorReport {
            error: ErrorBody {
                kind: error.kind().as_str(),
                message: error.to_string(),
            },
        };
        self.render(&report)
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        match self.format {
            Format::Json => serde_json::to_string_pretty(value)
                .map_err(|e| anyhow!("Failed to serialize JSON output: {}", e)),
            Format::Toml => toml::to_string_pretty(value)
                .map_err(|e| anyhow!("Failed to serialize TOML output: {}", e)),
        }
    }
}
