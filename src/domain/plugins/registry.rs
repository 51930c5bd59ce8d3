//! Plugin registry implementation.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::config::{PluginOptions, PluginSpec};
use crate::domain::ValidationError;

use super::{AspectRatioPlugin, FormsPlugin, LineClampPlugin, Plugin, TypographyPlugin};

/// Builds a plugin instance from its configuration options.
///
/// Returns a human-readable reason when the options are rejected.
pub type PluginFactory = fn(&PluginOptions) -> Result<Arc<dyn Plugin>, String>;

struct RegistryEntry {
    description: &'static str,
    factory: PluginFactory,
}

/// Mapping of plugin identifiers to statically-known factories.
pub struct PluginRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PluginRegistry {
    /// Create a registry with no plugins.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Create a registry with the first-party plugins.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(
            AspectRatioPlugin::ID,
            AspectRatioPlugin::DESCRIPTION,
            aspect_ratio,
        );
        registry.register(FormsPlugin::ID, FormsPlugin::DESCRIPTION, forms);
        registry.register(
            TypographyPlugin::ID,
            TypographyPlugin::DESCRIPTION,
            typography,
        );
        registry.register(LineClampPlugin::ID, LineClampPlugin::DESCRIPTION, line_clamp);
        registry
    }

    /// Register a factory, replacing any previous entry with the same identifier.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        description: &'static str,
        factory: PluginFactory,
    ) -> &mut Self {
        let id = id.into();
        debug!(plugin = %id, "Registering plugin factory");
        self.entries.insert(
            id,
            RegistryEntry {
                description,
                factory,
            },
        );
        self
    }

    /// Check whether an identifier is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered identifiers with their descriptions, sorted by identifier.
    pub fn list(&self) -> Vec<(&str, &'static str)> {
        self.entries
            .iter()
            .map(|(id, entry)| (id.as_str(), entry.description))
            .collect()
    }

    /// Instantiate the plugin named by `spec`.
    pub fn instantiate(&self, spec: &PluginSpec) -> Result<Arc<dyn Plugin>, ValidationError> {
        let identifier = spec.id();
        let entry = self
            .entries
            .get(identifier)
            .ok_or_else(|| ValidationError::UnknownPlugin {
                identifier: identifier.to_string(),
            })?;

        (entry.factory)(&spec.options()).map_err(|reason| ValidationError::InvalidPluginOptions {
            identifier: identifier.to_string(),
            reason,
        })
    }
}

/// Reject option keys a plugin does not understand.
pub(super) fn ensure_known_options(options: &PluginOptions, known: &[&str]) -> Result<(), String> {
    match options.keys().find(|k| !known.contains(&k.as_str())) {
        Some(key) if known.is_empty() => Err(format!("takes no options, got '{}'", key)),
        Some(key) => Err(format!(
            "unknown option '{}' (expected one of: {})",
            key,
            known.join(", ")
        )),
        None => Ok(()),
    }
}

fn aspect_ratio(options: &PluginOptions) -> Result<Arc<dyn Plugin>, String> {
    Ok(Arc::new(AspectRatioPlugin::from_options(options)?))
}

fn forms(options: &PluginOptions) -> Result<Arc<dyn Plugin>, String> {
    Ok(Arc::new(FormsPlugin::from_options(options)?))
}

fn typography(options: &PluginOptions) -> Result<Arc<dyn Plugin>, String> {
    Ok(Arc::new(TypographyPlugin::from_options(options)?))
}

fn line_clamp(options: &PluginOptions) -> Result<Arc<dyn Plugin>, String> {
    Ok(Arc::new(LineClampPlugin::from_options(options)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Theme, Utility};
    use serde_json::json;

    #[derive(Debug)]
    struct NoopPlugin;

    impl Plugin for NoopPlugin {
        fn id(&self) -> &'static str {
            "noop"
        }

        fn description(&self) -> &'static str {
            "Contributes nothing"
        }

        fn utilities(&self, _theme: &Theme) -> Vec<Utility> {
            Vec::new()
        }
    }

    fn noop(_options: &PluginOptions) -> Result<Arc<dyn Plugin>, String> {
        Ok(Arc::new(NoopPlugin))
    }

    #[test]
    fn test_builtin_registry_lists_first_party_plugins() {
        let registry = PluginRegistry::builtin();
        let ids: Vec<&str> = registry.list().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![
                "@tailwindcss/aspect-ratio",
                "@tailwindcss/forms",
                "@tailwindcss/line-clamp",
                "@tailwindcss/typography",
            ]
        );
    }

    #[test]
    fn test_instantiate_unknown_plugin() {
        let registry = PluginRegistry::builtin();
        let err = registry
            .instantiate(&PluginSpec::from("nonexistent-plugin"))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownPlugin {
                identifier: "nonexistent-plugin".to_string()
            }
        );
    }

    #[test]
    fn test_instantiate_rejects_bad_options() {
        let registry = PluginRegistry::builtin();
        let mut options = PluginOptions::new();
        options.insert("ratio".to_string(), json!("16/9"));
        let spec = PluginSpec::Configured {
            id: "@tailwindcss/aspect-ratio".to_string(),
            options,
        };

        let err = registry.instantiate(&spec).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidPluginOptions { ref identifier, .. }
                if identifier == "@tailwindcss/aspect-ratio"
        ));
        assert!(err.to_string().contains("takes no options"));
    }

    #[test]
    fn test_register_custom_plugin() {
        let mut registry = PluginRegistry::empty();
        assert!(!registry.contains("noop"));

        registry.register("noop", "Contributes nothing", noop);
        assert!(registry.contains("noop"));

        let plugin = registry.instantiate(&PluginSpec::from("noop")).unwrap();
        assert_eq!(plugin.id(), "noop");
        assert!(plugin.utilities(&Theme::new()).is_empty());
    }

    #[test]
    fn test_ensure_known_options() {
        let mut options = PluginOptions::new();
        assert!(ensure_known_options(&options, &[]).is_ok());

        options.insert("strategy".to_string(), json!("class"));
        assert!(ensure_known_options(&options, &["strategy"]).is_ok());

        let err = ensure_known_options(&options, &["className"]).unwrap_err();
        assert_eq!(
            err,
            "unknown option 'strategy' (expected one of: className)"
        );
    }
}
