//! Configuration resolver.
//!
//! Merges a user configuration over the built-in defaults and validates the
//! result. Resolution is a pure function of its inputs: no file system
//! access, no shared mutable state, and either a complete
//! [`ResolvedConfig`] or an error.

use std::collections::HashSet;
use tracing::debug;

use crate::config::validation;
use crate::config::{PluginSpec, RawConfig, RawTheme};
use crate::domain::plugins::PluginRegistry;
use crate::domain::{DefaultConfig, ResolvedConfig, ResolvedPlugin, Theme, ValidationError};

/// Resolve `raw` against `defaults` using the built-in plugin registry.
pub fn resolve(raw: &RawConfig, defaults: &DefaultConfig) -> Result<ResolvedConfig, ValidationError> {
    let registry = PluginRegistry::builtin();
    ConfigResolver::new(&registry).resolve(raw, defaults)
}

/// Resolves user configuration against a plugin registry.
pub struct ConfigResolver<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver backed by `registry`.
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    /// Merge and validate.
    ///
    /// Theme is checked first, then content, then plugins; the first
    /// violation is returned.
    pub fn resolve(
        &self,
        raw: &RawConfig,
        defaults: &DefaultConfig,
    ) -> Result<ResolvedConfig, ValidationError> {
        let theme = merge_theme(&defaults.theme, raw.theme.as_ref())?;
        let content = merge_content(&defaults.content, raw.content.as_deref().unwrap_or(&[]))?;
        let plugins = self.merge_plugins(&defaults.plugins, raw.plugins.as_deref().unwrap_or(&[]))?;

        debug!(
            content = content.len(),
            categories = theme.iter().count(),
            plugins = plugins.len(),
            "Resolved configuration"
        );

        Ok(ResolvedConfig::new(content, theme, plugins))
    }

    /// Concatenate plugin references, keep the first per identifier and
    /// instantiate each through the registry.
    fn merge_plugins(
        &self,
        defaults: &[PluginSpec],
        raw: &[PluginSpec],
    ) -> Result<Vec<ResolvedPlugin>, ValidationError> {
        let mut seen = HashSet::new();
        let mut plugins = Vec::new();

        for spec in defaults.iter().chain(raw) {
            if !self.registry.contains(spec.id()) {
                validation::validate_plugin_id(spec.id())?;
            }

            if !seen.insert(spec.id()) {
                debug!(plugin = %spec.id(), "Plugin already registered, ignoring duplicate");
                continue;
            }

            let instance = self.registry.instantiate(spec)?;
            plugins.push(ResolvedPlugin::new(spec.clone(), instance));
        }

        Ok(plugins)
    }
}

/// Apply category overrides, then extensions, to a copy of the default theme.
fn merge_theme(defaults: &Theme, raw: Option<&RawTheme>) -> Result<Theme, ValidationError> {
    let mut theme = defaults.clone();
    let Some(raw) = raw else {
        return Ok(theme);
    };

    for (name, value) in &raw.overrides {
        let (category, scale) = validation::parse_scale(name, name, value)?;
        debug!(category = %category, tokens = scale.len(), "Replacing theme category");
        theme.set_scale(category, scale);
    }

    if let Some(extend) = &raw.extend {
        for (name, value) in validation::extend_entries(extend)? {
            let label = format!("extend.{}", name);
            let (category, scale) = validation::parse_scale(&label, name, value)?;
            debug!(category = %category, tokens = scale.len(), "Extending theme category");
            for (key, token) in scale {
                theme.set_token(category, key, token);
            }
        }
    }

    Ok(theme)
}

/// Concatenate default and user globs, keeping the first occurrence of each.
fn merge_content(defaults: &[String], raw: &[String]) -> Result<Vec<String>, ValidationError> {
    let mut content = validation::validate_content("defaults.content", defaults)?;
    content.extend(validation::validate_content("content", raw)?);

    let mut seen = HashSet::new();
    content.retain(|pattern| seen.insert(pattern.clone()));

    if content.is_empty() {
        return Err(ValidationError::EmptyContentSet);
    }

    Ok(content)
}
