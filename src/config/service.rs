//! Configuration service for loading and generating config files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::RawConfig;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_FILE_NAME: &str = "tokenwind.toml";

/// On-disk configuration format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            other => bail!(
                "Unsupported config extension '.{}' for file {} (expected .toml or .json)",
                other,
                path.display()
            ),
        }
    }
}

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path (relative to the working directory).
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_FILE_NAME)
    }

    /// Get the default log directory.
    /// Always uses ~/.config/tokenwind/logs for cross-platform consistency.
    pub fn default_log_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tokenwind")
            .join("logs")
    }

    /// Load the user configuration from file.
    ///
    /// If `path` is `None`, uses the default path. The file is only parsed
    /// here; validation happens during resolution.
    pub fn load(path: Option<&Path>) -> Result<RawConfig> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        if !path.exists() {
            bail!(
                "Config file not found: {} (run `tokenwind init` to create one)",
                path.display()
            );
        }

        let format = ConfigFormat::from_path(&path)?;
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        debug!(path = %path.display(), ?format, "Loading configuration");

        Self::parse(&content, format)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration text in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<RawConfig> {
        let raw: RawConfig = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(raw)
    }

    /// Generate the starter configuration file at the specified path.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn generate_at(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }

        // Create parent directories if needed
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Starter configuration content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# tokenwind configuration file

# Files scanned for utility class usage (glob patterns)
content = ["*.html", "./src/**/*.rs"]

# Plugins contributing extra utilities, in registration order.
# Run `tokenwind plugins` to list the available identifiers.
plugins = [
    "@tailwindcss/aspect-ratio",
    # { id = "@tailwindcss/forms", options = { strategy = "class" } },
    # { id = "@tailwindcss/typography", options = { className = "prose" } },
]

# Categories set directly under [theme] replace the default scale:
# [theme.screens]
# tablet = "640px"
# desktop = "1280px"

# Categories under [theme.extend] are merged into the default scale
[theme.extend.gridTemplateColumns]
# Simple 16 column grid
"16" = "repeat(16, minmax(0, 1fr))"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("tokenwind.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("conf/tokenwind.JSON")).unwrap(),
            ConfigFormat::Json
        );
        assert!(ConfigFormat::from_path(Path::new("tailwind.config.js")).is_err());
        assert!(ConfigFormat::from_path(Path::new("tokenwind")).is_err());
    }

    #[test]
    fn test_default_content_parses() {
        let raw = ConfigService::parse(ConfigService::default_config_content(), ConfigFormat::Toml)
            .unwrap();
        assert_eq!(
            raw.content,
            Some(vec!["*.html".to_string(), "./src/**/*.rs".to_string()])
        );
        assert_eq!(raw.plugins.map(|p| p.len()), Some(1));
        assert!(raw.theme.and_then(|t| t.extend).is_some());
    }

    #[test]
    fn test_parse_json() {
        let raw = ConfigService::parse(
            r#"{"content": ["*.html"], "plugins": ["@tailwindcss/line-clamp"]}"#,
            ConfigFormat::Json,
        )
        .unwrap();
        assert_eq!(raw.content, Some(vec!["*.html".to_string()]));
    }

    #[test]
    fn test_parse_rejects_non_string_content() {
        let result = ConfigService::parse("content = [1, 2]", ConfigFormat::Toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_suggests_init() {
        let path = std::env::temp_dir().join("tokenwind-missing-config.toml");
        let err = ConfigService::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("tokenwind init"));
    }
}
