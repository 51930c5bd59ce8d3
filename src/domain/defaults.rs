//! Built-in baseline design tokens.

use super::{DefaultConfig, TokenCategory, TokenScale, Theme};

const SCREENS: &[(&str, &str)] = &[
    ("sm", "640px"),
    ("md", "768px"),
    ("lg", "1024px"),
    ("xl", "1280px"),
    ("2xl", "1536px"),
];

const COLORS: &[(&str, &str)] = &[
    ("transparent", "transparent"),
    ("current", "currentColor"),
    ("black", "#000"),
    ("white", "#fff"),
    ("gray-50", "#f9fafb"),
    ("gray-100", "#f3f4f6"),
    ("gray-200", "#e5e7eb"),
    ("gray-300", "#d1d5db"),
    ("gray-400", "#9ca3af"),
    ("gray-500", "#6b7280"),
    ("gray-600", "#4b5563"),
    ("gray-700", "#374151"),
    ("gray-800", "#1f2937"),
    ("gray-900", "#111827"),
    ("red-500", "#ef4444"),
    ("red-600", "#dc2626"),
    ("green-500", "#22c55e"),
    ("green-600", "#16a34a"),
    ("blue-500", "#3b82f6"),
    ("blue-600", "#2563eb"),
];

/// Spacing keys; values are `key / 4` rem.
const SPACING_STEPS: &[&str] = &[
    "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11", "12",
    "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64", "72",
    "80", "96",
];

const FONT_SIZES: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
];

const BORDER_RADII: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

impl DefaultConfig {
    /// Baseline configuration: complete theme, no content, no plugins.
    pub fn builtin() -> Self {
        Self {
            content: Vec::new(),
            theme: builtin_theme(),
            plugins: Vec::new(),
        }
    }
}

/// Complete baseline theme with every category populated.
pub fn builtin_theme() -> Theme {
    let mut theme = Theme::new();
    theme.set_scale(TokenCategory::Screens, from_pairs(SCREENS));
    theme.set_scale(TokenCategory::Colors, from_pairs(COLORS));
    theme.set_scale(TokenCategory::Spacing, spacing());
    theme.set_scale(TokenCategory::FontSize, from_pairs(FONT_SIZES));
    theme.set_scale(TokenCategory::BorderRadius, from_pairs(BORDER_RADII));
    theme.set_scale(TokenCategory::GridTemplateColumns, repeat_tracks(12));
    theme.set_scale(TokenCategory::GridTemplateRows, repeat_tracks(6));
    theme.set_scale(TokenCategory::GridColumn, grid_column_spans(12));
    theme.set_scale(TokenCategory::AspectRatio, counting(16));
    theme.set_scale(TokenCategory::LineClamp, counting(6));
    theme
}

fn from_pairs(pairs: &[(&str, &str)]) -> TokenScale {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn spacing() -> TokenScale {
    let mut scale = from_pairs(&[("px", "1px"), ("0", "0px")]);
    for step in SPACING_STEPS {
        if let Ok(n) = step.parse::<f64>() {
            scale.insert(step.to_string(), format!("{}rem", n / 4.0));
        }
    }
    scale
}

/// `none` plus `n` equal-width tracks for `1..=count`.
fn repeat_tracks(count: u32) -> TokenScale {
    let mut scale = from_pairs(&[("none", "none")]);
    for n in 1..=count {
        scale.insert(n.to_string(), format!("repeat({}, minmax(0, 1fr))", n));
    }
    scale
}

fn grid_column_spans(count: u32) -> TokenScale {
    let mut scale = from_pairs(&[("auto", "auto"), ("span-full", "1 / -1")]);
    for n in 1..=count {
        scale.insert(format!("span-{}", n), format!("span {} / span {}", n, n));
    }
    scale
}

/// Keys and values `1..=count`.
fn counting(count: u32) -> TokenScale {
    (1..=count).map(|n| (n.to_string(), n.to_string())).collect()
}
