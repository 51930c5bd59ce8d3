//! Error types for configuration resolution.

use thiserror::Error;

/// Reason a configuration could not be resolved.
///
/// Every variant names the offending entry so the user can fix the source
/// file. Resolution never applies a configuration partially.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Neither the defaults nor the user configuration list any content glob
    #[error("content must list at least one glob pattern to scan")]
    EmptyContentSet,

    /// A content entry is blank or not a valid glob
    #[error("{field}[{index}]: invalid glob pattern '{pattern}': {reason}")]
    InvalidContentGlob {
        field: &'static str,
        index: usize,
        pattern: String,
        reason: String,
    },

    /// A theme category is unknown or is not a mapping of scalar tokens
    #[error("theme.{category}: {reason}")]
    InvalidThemeShape { category: String, reason: String },

    /// A plugin identifier has no registry entry
    #[error("unknown plugin '{identifier}'")]
    UnknownPlugin { identifier: String },

    /// A registered plugin rejected its options
    #[error("plugin '{identifier}': {reason}")]
    InvalidPluginOptions { identifier: String, reason: String },
}

/// Fieldless discriminant of [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    EmptyContentSet,
    InvalidContentGlob,
    InvalidThemeShape,
    UnknownPlugin,
    InvalidPluginOptions,
}

impl ValidationErrorKind {
    /// Stable name used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::EmptyContentSet => "EmptyContentSet",
            ValidationErrorKind::InvalidContentGlob => "InvalidContentGlob",
            ValidationErrorKind::InvalidThemeShape => "InvalidThemeShape",
            ValidationErrorKind::UnknownPlugin => "UnknownPlugin",
            ValidationErrorKind::InvalidPluginOptions => "InvalidPluginOptions",
        }
    }
}

impl ValidationError {
    /// Get the kind of this error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::EmptyContentSet => ValidationErrorKind::EmptyContentSet,
            ValidationError::InvalidContentGlob { .. } => ValidationErrorKind::InvalidContentGlob,
            ValidationError::InvalidThemeShape { .. } => ValidationErrorKind::InvalidThemeShape,
            ValidationError::UnknownPlugin { .. } => ValidationErrorKind::UnknownPlugin,
            ValidationError::InvalidPluginOptions { .. } => {
                ValidationErrorKind::InvalidPluginOptions
            }
        }
    }

    pub(crate) fn theme_shape(category: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidThemeShape {
            category: category.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_offending_entry() {
        let err = ValidationError::UnknownPlugin {
            identifier: "nonexistent-plugin".to_string(),
        };
        assert_eq!(err.to_string(), "unknown plugin 'nonexistent-plugin'");
        assert_eq!(err.kind(), ValidationErrorKind::UnknownPlugin);
        assert_eq!(err.kind().as_str(), "UnknownPlugin");

        let err = ValidationError::theme_shape("extend.colors", "must be a mapping");
        assert_eq!(err.to_string(), "theme.extend.colors: must be a mapping");
        assert_eq!(err.kind(), ValidationErrorKind::InvalidThemeShape);
    }

    #[test]
    fn test_content_glob_error_includes_index() {
        let err = ValidationError::InvalidContentGlob {
            field: "content",
            index: 2,
            pattern: "src/[".to_string(),
            reason: "unclosed character class".to_string(),
        };
        assert!(err.to_string().starts_with("content[2]:"));
        assert!(err.to_string().contains("src/["));
    }
}
