//! tokenwind: design-token configuration resolver
//!
//! Merges a user configuration (content globs, theme overrides and
//! extensions, plugins) over built-in defaults and validates it, producing
//! the normalized configuration a utility-first CSS generator consumes.
//!
//! ```
//! use tokenwind::{resolve, DefaultConfig, RawConfig};
//!
//! let raw: RawConfig = toml::from_str(r#"
//! content = ["*.html", "./src/**/*.rs"]
//! plugins = ["@tailwindcss/aspect-ratio"]
//!
//! [theme.extend.gridTemplateColumns]
//! "16" = "repeat(16, minmax(0, 1fr))"
//! "#).unwrap();
//!
//! let resolved = resolve(&raw, &DefaultConfig::builtin()).unwrap();
//! assert_eq!(resolved.content(), ["*.html", "./src/**/*.rs"]);
//! assert_eq!(resolved.plugin_ids(), ["@tailwindcss/aspect-ratio"]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod service;

pub use config::{PluginOptions, PluginSpec, RawConfig, RawTheme};
pub use domain::{
    resolve, ConfigResolver, DefaultConfig, Plugin, PluginRegistry, ResolvedConfig, Theme,
    TokenCategory, ValidationError, ValidationErrorKind,
};
