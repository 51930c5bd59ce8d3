//! Configuration data types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::ResolvedConfig;

/// Options passed to a plugin factory.
pub type PluginOptions = serde_json::Map<String, Value>;

/// User-authored configuration, as read from the config file.
///
/// Every section is optional; missing sections fall back to the defaults.
///
/// # Examples
///
/// ```toml
/// content = ["*.html", "./src/**/*.rs"]
/// plugins = ["@tailwindcss/aspect-ratio"]
///
/// [theme.extend.gridTemplateColumns]
/// "16" = "repeat(16, minmax(0, 1fr))"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Glob patterns of files to scan for class usage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,

    /// Theme overrides and extensions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<RawTheme>,

    /// Plugins to register, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<PluginSpec>>,
}

/// Theme section of the user configuration.
///
/// Categories listed directly under `theme` replace the default scale;
/// categories under `theme.extend` are merged into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTheme {
    /// Additive token extensions, keyed by category name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<Value>,

    /// Whole-category replacements, keyed by category name
    #[serde(flatten)]
    pub overrides: BTreeMap<String, Value>,
}

/// Plugin reference.
///
/// Either a bare identifier or an identifier with options:
///
/// ```toml
/// plugins = [
///     "@tailwindcss/aspect-ratio",
///     { id = "@tailwindcss/forms", options = { strategy = "class" } },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSpec {
    /// Identifier only, default options
    Id(String),
    /// Identifier with factory options
    Configured {
        id: String,
        #[serde(default)]
        options: PluginOptions,
    },
}

impl PluginSpec {
    /// Registry identifier of the plugin.
    pub fn id(&self) -> &str {
        match self {
            PluginSpec::Id(id) => id,
            PluginSpec::Configured { id, .. } => id,
        }
    }

    /// Options for the plugin factory (empty for bare identifiers).
    pub fn options(&self) -> PluginOptions {
        match self {
            PluginSpec::Id(_) => PluginOptions::new(),
            PluginSpec::Configured { options, .. } => options.clone(),
        }
    }
}

impl From<&str> for PluginSpec {
    fn from(id: &str) -> Self {
        PluginSpec::Id(id.to_string())
    }
}

impl From<&ResolvedConfig> for RawConfig {
    /// Express a resolved configuration as user input: every category becomes
    /// an override and nothing is extended.
    fn from(resolved: &ResolvedConfig) -> Self {
        let overrides = resolved
            .theme()
            .iter()
            .map(|(category, scale)| {
                let tokens = scale
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect::<serde_json::Map<_, _>>();
                (category.as_str().to_string(), Value::Object(tokens))
            })
            .collect();

        Self {
            content: Some(resolved.content().to_vec()),
            theme: Some(RawTheme {
                extend: None,
                overrides,
            }),
            plugins: Some(
                resolved
                    .plugins()
                    .iter()
                    .map(|p| p.spec().clone())
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_config() {
        let toml_str = r#"
content = ["*.html", "./src/**/*.rs"]
plugins = ["@tailwindcss/aspect-ratio"]

[theme.extend.gridTemplateColumns]
"16" = "repeat(16, minmax(0, 1fr))"
"#;
        let raw: RawConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            raw.content,
            Some(vec!["*.html".to_string(), "./src/**/*.rs".to_string()])
        );
        assert_eq!(
            raw.plugins,
            Some(vec![PluginSpec::Id("@tailwindcss/aspect-ratio".to_string())])
        );

        let theme = raw.theme.unwrap();
        assert!(theme.overrides.is_empty());
        let extend = theme.extend.unwrap();
        assert_eq!(
            extend["gridTemplateColumns"]["16"],
            Value::String("repeat(16, minmax(0, 1fr))".to_string())
        );
    }

    #[test]
    fn test_theme_overrides_are_collected() {
        let json = r#"{"theme": {"screens": {"tablet": "640px"}, "extend": {}}}"#;
        let raw: RawConfig = serde_json::from_str(json).unwrap();
        let theme = raw.theme.unwrap();
        assert_eq!(theme.overrides.len(), 1);
        assert!(theme.overrides.contains_key("screens"));
        assert!(theme.extend.is_some());
    }

    #[test]
    fn test_plugin_spec_with_options() {
        let toml_str = r#"
plugins = [
    "@tailwindcss/aspect-ratio",
    { id = "@tailwindcss/forms", options = { strategy = "class" } },
]
"#;
        let raw: RawConfig = toml::from_str(toml_str).unwrap();
        let plugins = raw.plugins.unwrap();
        assert_eq!(plugins[0].id(), "@tailwindcss/aspect-ratio");
        assert!(plugins[0].options().is_empty());
        assert_eq!(plugins[1].id(), "@tailwindcss/forms");
        assert_eq!(
            plugins[1].options().get("strategy"),
            Some(&Value::String("class".to_string()))
        );
    }

    #[test]
    fn test_empty_config_is_all_none() {
        let raw: RawConfig = toml::from_str("").unwrap();
        assert_eq!(raw, RawConfig::default());
    }
}
