//! Plugin trait definition.

use serde::Serialize;
use std::fmt;

use crate::domain::Theme;

/// Single CSS declaration contributed by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Selector and its declarations, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Utility {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Utility {
    /// Create a utility from `(property, value)` pairs.
    pub fn new(selector: impl Into<String>, declarations: &[(&str, &str)]) -> Self {
        Self {
            selector: selector.into(),
            declarations: declarations
                .iter()
                .map(|(property, value)| Declaration {
                    property: property.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    /// Append a declaration.
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.to_string(),
            value: value.into(),
        });
        self
    }
}

/// Trait implemented by generator plugins.
///
/// The generator calls [`Plugin::utilities`] once per build with the
/// resolved theme.
pub trait Plugin: Send + Sync + fmt::Debug {
    /// Registry identifier, e.g. `@tailwindcss/aspect-ratio`.
    fn id(&self) -> &'static str;

    /// One-line description for listings.
    fn description(&self) -> &'static str;

    /// Utility definitions this plugin contributes for the given theme.
    fn utilities(&self, theme: &Theme) -> Vec<Utility>;
}
