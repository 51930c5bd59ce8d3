//! Typography plugin implementation.

use serde_json::Value;

use super::registry::ensure_known_options;
use super::{Plugin, Utility};
use crate::config::PluginOptions;
use crate::domain::{TokenCategory, Theme};

/// Size modifiers: suffix, font size, line height.
const SIZES: &[(&str, &str, &str)] = &[
    ("sm", "0.875rem", "1.7142857"),
    ("lg", "1.125rem", "1.7777778"),
    ("xl", "1.25rem", "1.8"),
    ("2xl", "1.5rem", "1.6666667"),
];

/// Typographic defaults for rendered prose (`prose`, `prose-lg`, ...).
#[derive(Debug, Clone)]
pub struct TypographyPlugin {
    class_name: String,
}

impl TypographyPlugin {
    pub const ID: &'static str = "@tailwindcss/typography";
    pub const DESCRIPTION: &'static str =
        "Typographic defaults for rendered content via the prose class";

    /// Create the plugin from `{ className = "..." }`.
    pub fn from_options(options: &PluginOptions) -> Result<Self, String> {
        ensure_known_options(options, &["className"])?;

        let class_name = match options.get("className") {
            None => "prose".to_string(),
            Some(Value::String(s)) if is_class_name(s) => s.clone(),
            Some(other) => {
                return Err(format!(
                    "option 'className' must be a plain class name, got {}",
                    other
                ))
            }
        };

        Ok(Self { class_name })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

fn is_class_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Plugin for TypographyPlugin {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn utilities(&self, theme: &Theme) -> Vec<Utility> {
        let color = |key: &str, fallback: &str| -> String {
            theme
                .token(TokenCategory::Colors, key)
                .unwrap_or(fallback)
                .to_string()
        };
        let base = format!(".{}", self.class_name);

        let mut utilities = vec![
            Utility::new(base.clone(), &[])
                .with("color", color("gray-700", "#374151"))
                .with("max-width", "65ch")
                .with("font-size", "1rem")
                .with("line-height", "1.75"),
            Utility::new(format!("{} a", base), &[])
                .with("color", color("gray-900", "#111827"))
                .with("text-decoration", "underline")
                .with("font-weight", "500"),
            Utility::new(format!("{} strong", base), &[])
                .with("color", color("gray-900", "#111827"))
                .with("font-weight", "600"),
        ];

        for (suffix, font_size, line_height) in SIZES {
            utilities.push(Utility::new(
                format!("{}-{}", base, suffix),
                &[("font-size", *font_size), ("line-height", *line_height)],
            ));
        }

        utilities
    }
}
