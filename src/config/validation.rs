//! Shape validation of user configuration entries.
//!
//! These checks look only at the raw values; nothing here touches the file
//! system or the plugin registry.

use globset::GlobBuilder;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::domain::{TokenCategory, TokenScale, ValidationError};

/// Package-style plugin identifier: `name` or `@scope/name`.
fn plugin_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(@[a-z0-9][a-z0-9._-]*/)?[a-z0-9][a-z0-9._-]*$")
            .expect("plugin identifier pattern is valid")
    })
}

/// Validate content globs and return them trimmed.
///
/// `field` names the list in errors (`content`, `defaults.content`).
/// Patterns are only compiled to check their syntax, never matched.
pub fn validate_content(
    field: &'static str,
    patterns: &[String],
) -> Result<Vec<String>, ValidationError> {
    patterns
        .iter()
        .enumerate()
        .map(|(index, pattern)| {
            let trimmed = pattern.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::InvalidContentGlob {
                    field,
                    index,
                    pattern: pattern.clone(),
                    reason: "pattern cannot be empty".to_string(),
                });
            }

            GlobBuilder::new(trimmed)
                .literal_separator(true)
                .build()
                .map_err(|e| ValidationError::InvalidContentGlob {
                    field,
                    index,
                    pattern: pattern.clone(),
                    reason: e.kind().to_string(),
                })?;

            Ok(trimmed.to_string())
        })
        .collect()
}

/// Validate one theme category and convert it to a token scale.
///
/// `label` is the path shown in errors (`extend.colors`, `screens`).
pub fn parse_scale(
    label: &str,
    name: &str,
    value: &Value,
) -> Result<(TokenCategory, TokenScale), ValidationError> {
    let category: TokenCategory = name
        .parse()
        .map_err(|reason: String| ValidationError::theme_shape(label, reason))?;

    let Value::Object(tokens) = value else {
        return Err(ValidationError::theme_shape(
            label,
            format!("expected a mapping of tokens, found {}", value_kind(value)),
        ));
    };

    let mut scale = TokenScale::new();
    for (key, token) in tokens {
        if key.trim().is_empty() {
            return Err(ValidationError::theme_shape(label, "token key cannot be empty"));
        }

        let rendered = match token {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(ValidationError::theme_shape(
                    label,
                    format!(
                        "token '{}' must be a string or number, found {}",
                        key,
                        value_kind(other)
                    ),
                ));
            }
        };
        scale.insert(key.clone(), rendered);
    }

    Ok((category, scale))
}

/// Get the category mappings of `theme.extend`.
pub fn extend_entries(extend: &Value) -> Result<&Map<String, Value>, ValidationError> {
    match extend {
        Value::Object(categories) => Ok(categories),
        other => Err(ValidationError::theme_shape(
            "extend",
            format!("expected a mapping of categories, found {}", value_kind(other)),
        )),
    }
}

/// Check that a plugin identifier is well-formed.
///
/// A malformed identifier can never match a registry entry, so it is
/// reported as unknown.
pub fn validate_plugin_id(identifier: &str) -> Result<(), ValidationError> {
    if plugin_id_pattern().is_match(identifier) {
        Ok(())
    } else {
        Err(ValidationError::UnknownPlugin {
            identifier: identifier.to_string(),
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationErrorKind;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_content_trims_patterns() {
        let patterns = strings(&["*.html", "  ./src/**/*.rs "]);
        assert_eq!(
            validate_content("content", &patterns).unwrap(),
            strings(&["*.html", "./src/**/*.rs"])
        );
    }

    #[test]
    fn test_validate_content_rejects_blank_entry() {
        let patterns = strings(&["*.html", "   "]);
        let err = validate_content("content", &patterns).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidContentGlob);
        assert!(matches!(err, ValidationError::InvalidContentGlob { index: 1, .. }));
    }

    #[test]
    fn test_validate_content_rejects_bad_glob() {
        let patterns = strings(&["src/**/*.{rs,html"]);
        let err = validate_content("content", &patterns).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidContentGlob { index: 0, .. }));
    }

    #[test]
    fn test_validate_content_labels_field() {
        let patterns = strings(&["src/["]);
        let err = validate_content("defaults.content", &patterns).unwrap_err();
        assert!(err.to_string().starts_with("defaults.content[0]:"), "{}", err);
    }

    #[test]
    fn test_parse_scale_accepts_strings_and_numbers() {
        let value = json!({ "16": "repeat(16, minmax(0, 1fr))", "2": 2 });
        let (category, scale) = parse_scale("extend.lineClamp", "lineClamp", &value).unwrap();
        assert_eq!(category, TokenCategory::LineClamp);
        assert_eq!(scale.get("2").map(String::as_str), Some("2"));
        assert_eq!(
            scale.get("16").map(String::as_str),
            Some("repeat(16, minmax(0, 1fr))")
        );
    }

    #[test]
    fn test_parse_scale_rejects_non_mapping() {
        let err = parse_scale("extend.colors", "colors", &json!("red")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidThemeShape {
                category: "extend.colors".to_string(),
                reason: "expected a mapping of tokens, found a string".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_scale_rejects_nested_token() {
        let value = json!({ "red": { "500": "#ef4444" } });
        let err = parse_scale("colors", "colors", &value).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidThemeShape);
        assert!(err.to_string().contains("token 'red'"));
    }

    #[test]
    fn test_parse_scale_rejects_blank_token_key() {
        let value = json!({ "sm": "640px", "  ": "768px" });
        let err = parse_scale("extend.screens", "screens", &value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidThemeShape {
                category: "extend.screens".to_string(),
                reason: "token key cannot be empty".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_scale_rejects_unknown_category() {
        let err = parse_scale("extend.gridCols", "gridCols", &json!({})).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidThemeShape);
        assert!(err.to_string().contains("unrecognized token category"));
    }

    #[test]
    fn test_extend_must_be_mapping() {
        assert!(extend_entries(&json!({ "colors": {} })).is_ok());

        let err = extend_entries(&json!(["colors"])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidThemeShape {
                category: "extend".to_string(),
                reason: "expected a mapping of categories, found an array".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_plugin_id() {
        assert!(validate_plugin_id("@tailwindcss/aspect-ratio").is_ok());
        assert!(validate_plugin_id("line-clamp").is_ok());
        assert!(validate_plugin_id("nonexistent-plugin").is_ok());

        assert!(validate_plugin_id("").is_err());
        assert!(validate_plugin_id("require('@tailwindcss/forms')").is_err());
        assert!(validate_plugin_id("@Scope/Name").is_err());
    }
}
