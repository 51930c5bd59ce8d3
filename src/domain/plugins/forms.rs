//! Form reset plugin implementation.

use serde_json::Value;

use super::registry::ensure_known_options;
use super::{Declaration, Plugin, Utility};
use crate::config::PluginOptions;
use crate::domain::{TokenCategory, Theme};

/// Which selectors the forms plugin styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormsStrategy {
    /// Element selectors only
    Base,
    /// `.form-*` classes only
    Class,
    /// Both element selectors and classes
    Both,
}

/// Opinionated form element resets.
#[derive(Debug, Clone)]
pub struct FormsPlugin {
    strategy: FormsStrategy,
}

struct FormRule {
    base: &'static str,
    class: &'static str,
    kind: RuleKind,
}

enum RuleKind {
    TextField,
    Select,
    Toggle,
    Checkbox,
    Radio,
}

const RULES: &[FormRule] = &[
    FormRule {
        base: "[type='text'],input:where(:not([type])),[type='email'],[type='url'],\
               [type='password'],[type='number'],[type='date'],[type='datetime-local'],\
               [type='month'],[type='search'],[type='tel'],[type='time'],[type='week'],\
               [multiple],textarea",
        class: ".form-input,.form-textarea,.form-multiselect",
        kind: RuleKind::TextField,
    },
    FormRule {
        base: "select",
        class: ".form-select",
        kind: RuleKind::Select,
    },
    FormRule {
        base: "[type='checkbox'],[type='radio']",
        class: ".form-checkbox,.form-radio",
        kind: RuleKind::Toggle,
    },
    FormRule {
        base: "[type='checkbox']",
        class: ".form-checkbox",
        kind: RuleKind::Checkbox,
    },
    FormRule {
        base: "[type='radio']",
        class: ".form-radio",
        kind: RuleKind::Radio,
    },
];

impl FormsPlugin {
    pub const ID: &'static str = "@tailwindcss/forms";
    pub const DESCRIPTION: &'static str =
        "Form element resets via element selectors and/or .form-* classes";

    /// Create the plugin from `{ strategy = "base" | "class" }`.
    pub fn from_options(options: &PluginOptions) -> Result<Self, String> {
        ensure_known_options(options, &["strategy"])?;

        let strategy = match options.get("strategy") {
            None => FormsStrategy::Both,
            Some(Value::String(s)) if s == "base" => FormsStrategy::Base,
            Some(Value::String(s)) if s == "class" => FormsStrategy::Class,
            Some(other) => {
                return Err(format!(
                    "option 'strategy' must be \"base\" or \"class\", got {}",
                    other
                ))
            }
        };

        Ok(Self { strategy })
    }

    pub fn strategy(&self) -> FormsStrategy {
        self.strategy
    }

    fn declarations(kind: &RuleKind, theme: &Theme) -> Vec<Declaration> {
        let color = |key: &str, fallback: &str| -> String {
            theme
                .token(TokenCategory::Colors, key)
                .unwrap_or(fallback)
                .to_string()
        };
        let border = color("gray-500", "#6b7280");
        let white = color("white", "#fff");
        let accent = color("blue-600", "#2563eb");

        let pairs: Vec<(&str, String)> = match kind {
            RuleKind::TextField | RuleKind::Select => {
                let select = matches!(kind, RuleKind::Select);
                let mut pairs = vec![
                    ("appearance", "none".to_string()),
                    ("background-color", white),
                    ("border-color", border),
                    ("border-width", "1px".to_string()),
                    ("border-radius", "0px".to_string()),
                    ("padding-top", "0.5rem".to_string()),
                    (
                        "padding-right",
                        (if select { "2.5rem" } else { "0.75rem" }).to_string(),
                    ),
                    ("padding-bottom", "0.5rem".to_string()),
                    ("padding-left", "0.75rem".to_string()),
                    ("font-size", "1rem".to_string()),
                    ("line-height", "1.5rem".to_string()),
                ];
                if select {
                    pairs.push(("background-position", "right 0.5rem center".to_string()));
                    pairs.push(("background-repeat", "no-repeat".to_string()));
                }
                pairs
            }
            RuleKind::Toggle => vec![
                ("appearance", "none".to_string()),
                ("padding", "0".to_string()),
                ("display", "inline-block".to_string()),
                ("vertical-align", "middle".to_string()),
                ("flex-shrink", "0".to_string()),
                ("height", "1rem".to_string()),
                ("width", "1rem".to_string()),
                ("color", accent),
                ("background-color", white),
                ("border-color", border),
                ("border-width", "1px".to_string()),
            ],
            RuleKind::Checkbox => vec![("border-radius", "0px".to_string())],
            RuleKind::Radio => vec![("border-radius", "100%".to_string())],
        };

        pairs
            .into_iter()
            .map(|(property, value)| Declaration {
                property: property.to_string(),
                value,
            })
            .collect()
    }
}

impl Plugin for FormsPlugin {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn utilities(&self, theme: &Theme) -> Vec<Utility> {
        let mut utilities = Vec::new();

        for rule in RULES {
            let declarations = Self::declarations(&rule.kind, theme);
            if self.strategy != FormsStrategy::Class {
                utilities.push(Utility {
                    selector: rule.base.to_string(),
                    declarations: declarations.clone(),
                });
            }
            if self.strategy != FormsStrategy::Base {
                utilities.push(Utility {
                    selector: rule.class.to_string(),
                    declarations,
                });
            }
        }

        utilities
    }
}
