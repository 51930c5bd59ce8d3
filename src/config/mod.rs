//! Configuration management module.
//!
//! Handles user configuration file loading (TOML or JSON), shape validation,
//! and starter file generation.

mod service;
mod types;
pub mod validation;

pub use service::{ConfigFormat, ConfigService};
pub use types::{PluginOptions, PluginSpec, RawConfig, RawTheme};
