//! Line-clamp plugin implementation.

use super::registry::ensure_known_options;
use super::{Plugin, Utility};
use crate::config::PluginOptions;
use crate::domain::{TokenCategory, Theme};

/// Multi-line truncation utilities (`line-clamp-*`).
#[derive(Debug, Clone, Default)]
pub struct LineClampPlugin;

impl LineClampPlugin {
    pub const ID: &'static str = "@tailwindcss/line-clamp";
    pub const DESCRIPTION: &'static str = "Multi-line text truncation via line-clamp-{n}";

    /// Create the plugin; it accepts no options.
    pub fn from_options(options: &PluginOptions) -> Result<Self, String> {
        ensure_known_options(options, &[])?;
        Ok(Self)
    }
}

impl Plugin for LineClampPlugin {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn utilities(&self, theme: &Theme) -> Vec<Utility> {
        let mut utilities: Vec<Utility> = theme
            .scale(TokenCategory::LineClamp)
            .into_iter()
            .flatten()
            .map(|(key, value)| {
                Utility::new(
                    format!(".line-clamp-{}", key),
                    &[
                        ("overflow", "hidden"),
                        ("display", "-webkit-box"),
                        ("-webkit-box-orient", "vertical"),
                    ],
                )
                .with("-webkit-line-clamp", value.as_str())
            })
            .collect();

        utilities.push(Utility::new(
            ".line-clamp-none",
            &[("-webkit-line-clamp", "unset")],
        ));
        utilities
    }
}
