//! Aspect-ratio plugin implementation.

use tracing::debug;

use super::registry::ensure_known_options;
use super::{Plugin, Utility};
use crate::config::PluginOptions;
use crate::domain::{TokenCategory, Theme};

/// Padding-based aspect-ratio utilities (`aspect-w-*`, `aspect-h-*`).
#[derive(Debug, Clone, Default)]
pub struct AspectRatioPlugin;

impl AspectRatioPlugin {
    pub const ID: &'static str = "@tailwindcss/aspect-ratio";
    pub const DESCRIPTION: &'static str =
        "Fixed aspect-ratio boxes via aspect-w-{n} and aspect-h-{n}";

    /// Create the plugin; it accepts no options.
    pub fn from_options(options: &PluginOptions) -> Result<Self, String> {
        ensure_known_options(options, &[])?;
        Ok(Self)
    }

    /// Integer ratio terms from the theme, ordered numerically.
    fn ratio_terms(theme: &Theme) -> Vec<(String, u32)> {
        let Some(scale) = theme.scale(TokenCategory::AspectRatio) else {
            return Vec::new();
        };

        let mut terms: Vec<(String, u32)> = scale
            .iter()
            .filter_map(|(key, value)| match value.trim().parse::<u32>() {
                Ok(n) if n > 0 => Some((key.clone(), n)),
                _ => {
                    debug!(key = %key, value = %value, "Skipping non-integer aspect ratio token");
                    None
                }
            })
            .collect();
        terms.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        terms
    }
}

const FILL_PARENT: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("height", "100%"),
    ("width", "100%"),
    ("top", "0"),
    ("right", "0"),
    ("bottom", "0"),
    ("left", "0"),
];

const RESET_CHILD: &[(&str, &str)] = &[
    ("position", "static"),
    ("height", "auto"),
    ("width", "auto"),
    ("top", "auto"),
    ("right", "auto"),
    ("bottom", "auto"),
    ("left", "auto"),
];

impl Plugin for AspectRatioPlugin {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn utilities(&self, theme: &Theme) -> Vec<Utility> {
        let terms = Self::ratio_terms(theme);
        let mut utilities = Vec::with_capacity(terms.len() * 3 + 2);

        for (key, n) in &terms {
            let width = format!(".aspect-w-{}", key);
            utilities.push(
                Utility::new(
                    width.clone(),
                    &[
                        ("position", "relative"),
                        (
                            "padding-bottom",
                            "calc(var(--tw-aspect-h) / var(--tw-aspect-w) * 100%)",
                        ),
                    ],
                )
                .with("--tw-aspect-w", n.to_string()),
            );
            utilities.push(Utility::new(format!("{} > *", width), FILL_PARENT));
        }

        for (key, n) in &terms {
            utilities.push(
                Utility::new(format!(".aspect-h-{}", key), &[])
                    .with("--tw-aspect-h", n.to_string()),
            );
        }

        utilities.push(Utility::new(
            ".aspect-none",
            &[("position", "static"), ("padding-bottom", "0")],
        ));
        utilities.push(Utility::new(".aspect-none > *", RESET_CHILD));

        utilities
    }
}
