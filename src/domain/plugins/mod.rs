//! Plugin system for contributing utility definitions.

mod aspect_ratio;
mod forms;
mod line_clamp;
mod plugin_trait;
mod registry;
mod typography;

pub use aspect_ratio::AspectRatioPlugin;
pub use forms::{FormsPlugin, FormsStrategy};
pub use line_clamp::LineClampPlugin;
pub use plugin_trait::{Declaration, Plugin, Utility};
pub use registry::{PluginFactory, PluginRegistry};
pub use typography::TypographyPlugin;
