//! Domain layer containing core resolution logic.
//!
//! This module contains:
//! - Theme token and resolved configuration types
//! - Built-in default tokens
//! - The configuration resolver
//! - Plugin trait, registry, and first-party plugins
//! - Logger with rotation

mod defaults;
mod error;
pub mod logger;
pub mod plugins;
pub mod resolver;
mod types;

pub use defaults::builtin_theme;
pub use error::{ValidationError, ValidationErrorKind};
pub use plugins::{Declaration, Plugin, PluginRegistry, Utility};
pub use resolver::{resolve, ConfigResolver};
pub use types::{
    DefaultConfig, ResolvedConfig, ResolvedPlugin, Theme, TokenCategory, TokenScale,
};
