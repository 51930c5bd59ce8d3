//! Core domain types for theme tokens and resolved configuration.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::PluginSpec;
use crate::domain::plugins::Plugin;

/// Token key -> token value within one category.
pub type TokenScale = BTreeMap<String, String>;

/// Recognized theme token categories.
///
/// The set is closed: configuration naming any other category is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenCategory {
    Screens,
    Colors,
    Spacing,
    FontSize,
    BorderRadius,
    GridTemplateColumns,
    GridTemplateRows,
    GridColumn,
    AspectRatio,
    LineClamp,
}

impl TokenCategory {
    /// All categories in canonical order.
    pub const ALL: [TokenCategory; 10] = [
        TokenCategory::Screens,
        TokenCategory::Colors,
        TokenCategory::Spacing,
        TokenCategory::FontSize,
        TokenCategory::BorderRadius,
        TokenCategory::GridTemplateColumns,
        TokenCategory::GridTemplateRows,
        TokenCategory::GridColumn,
        TokenCategory::AspectRatio,
        TokenCategory::LineClamp,
    ];

    /// Configuration key of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Screens => "screens",
            TokenCategory::Colors => "colors",
            TokenCategory::Spacing => "spacing",
            TokenCategory::FontSize => "fontSize",
            TokenCategory::BorderRadius => "borderRadius",
            TokenCategory::GridTemplateColumns => "gridTemplateColumns",
            TokenCategory::GridTemplateRows => "gridTemplateRows",
            TokenCategory::GridColumn => "gridColumn",
            TokenCategory::AspectRatio => "aspectRatio",
            TokenCategory::LineClamp => "lineClamp",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unrecognized token category '{}'", s))
    }
}

/// Fully populated design-token set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    categories: BTreeMap<TokenCategory, TokenScale>,
}

impl Theme {
    /// Create an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scale for a category, if present.
    pub fn scale(&self, category: TokenCategory) -> Option<&TokenScale> {
        self.categories.get(&category)
    }

    /// Look up a single token value.
    pub fn token(&self, category: TokenCategory, key: &str) -> Option<&str> {
        self.scale(category)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Replace a whole category.
    pub fn set_scale(&mut self, category: TokenCategory, scale: TokenScale) {
        self.categories.insert(category, scale);
    }

    /// Insert or overwrite one token, creating the category if needed.
    pub fn set_token(&mut self, category: TokenCategory, key: String, value: String) {
        self.categories
            .entry(category)
            .or_default()
            .insert(key, value);
    }

    /// Iterate over categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &TokenScale)> {
        self.categories.iter().map(|(c, s)| (*c, s))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (category, scale) in &self.categories {
            map.serialize_entry(category.as_str(), scale)?;
        }
        map.end()
    }
}

/// Built-in baseline configuration.
///
/// Same shape as the user configuration, minus `extend`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefaultConfig {
    /// Globs always scanned
    pub content: Vec<String>,

    /// Complete baseline token set
    pub theme: Theme,

    /// Plugins always registered
    pub plugins: Vec<PluginSpec>,
}

/// A plugin instance together with the reference that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedPlugin {
    spec: PluginSpec,
    instance: Arc<dyn Plugin>,
}

impl ResolvedPlugin {
    pub(crate) fn new(spec: PluginSpec, instance: Arc<dyn Plugin>) -> Self {
        Self { spec, instance }
    }

    /// Registry identifier.
    pub fn id(&self) -> &str {
        self.spec.id()
    }

    /// Reference as written in configuration.
    pub fn spec(&self) -> &PluginSpec {
        &self.spec
    }

    /// Plugin instance for invoking generator hooks.
    pub fn plugin(&self) -> &dyn Plugin {
        self.instance.as_ref()
    }
}

impl PartialEq for ResolvedPlugin {
    fn eq(&self, other: &Self) -> bool {
        self.spec == other.spec
    }
}

/// Generator-ready configuration.
///
/// Produced only by the resolver; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    content: Vec<String>,
    theme: Theme,
    plugins: Vec<ResolvedPlugin>,
}

impl ResolvedConfig {
    pub(crate) fn new(content: Vec<String>, theme: Theme, plugins: Vec<ResolvedPlugin>) -> Self {
        Self {
            content,
            theme,
            plugins,
        }
    }

    /// Deduplicated glob patterns, never empty.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Merged token set.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Registered plugins in registration order.
    pub fn plugins(&self) -> &[ResolvedPlugin] {
        &self.plugins
    }

    /// Identifiers of registered plugins in registration order.
    pub fn plugin_ids(&self) -> Vec<&str> {
        self.plugins.iter().map(ResolvedPlugin::id).collect()
    }
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let specs: Vec<&PluginSpec> = self.plugins.iter().map(ResolvedPlugin::spec).collect();
        let mut s = serializer.serialize_struct("ResolvedConfig", 3)?;
        s.serialize_field("content", &self.content)?;
        s.serialize_field("theme", &self.theme)?;
        s.serialize_field("plugins", &specs)?;
        s.end()
    }
}

impl From<&ResolvedConfig> for DefaultConfig {
    fn from(resolved: &ResolvedConfig) -> Self {
        Self {
            content: resolved.content.clone(),
            theme: resolved.theme.clone(),
            plugins: resolved.plugins.iter().map(|p| p.spec.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_name() {
        for category in TokenCategory::ALL {
            assert_eq!(category.as_str().parse::<TokenCategory>(), Ok(category));
        }
        assert!("gridTemplateColumn".parse::<TokenCategory>().is_err());
        assert!("GridTemplateColumns".parse::<TokenCategory>().is_err());
    }

    #[test]
    fn test_set_token_creates_category() {
        let mut theme = Theme::new();
        assert!(theme.is_empty());

        theme.set_token(
            TokenCategory::GridTemplateColumns,
            "16".to_string(),
            "repeat(16, minmax(0, 1fr))".to_string(),
        );
        assert_eq!(
            theme.token(TokenCategory::GridTemplateColumns, "16"),
            Some("repeat(16, minmax(0, 1fr))")
        );
        assert!(theme.scale(TokenCategory::Colors).is_none());
    }

    #[test]
    fn test_theme_serializes_with_config_keys() {
        let mut theme = Theme::new();
        theme.set_token(TokenCategory::LineClamp, "1".to_string(), "1".to_string());
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json, serde_json::json!({ "lineClamp": { "1": "1" } }));
    }
}
