//! TOML rendering and parsing of the settings document.
//!
//! Document layout:
//! ```toml
//! [settings]
//! extensions = [
//!     ".pvr",
//!     ".pvr.ccz",
//! ]
//! default_search_path = "/home/user/textures"
//! default_out_directory = ""
//! ```
//!
//! The root table is named after the entity and its keys appear in field
//! declaration order.  Any key the schema does not know, at the top level or
//! inside `[settings]`, is rejected: a foreign TOML file is a parse error, not
//! an empty settings value.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::domain::settings::Settings;

/// Errors that can occur while rendering or parsing a settings document.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The text is not TOML or does not match the settings schema.
    #[error("failed to parse settings document: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings value could not be rendered as TOML.
    #[error("failed to render settings document: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The raw bytes are not valid UTF-8.
    #[error("settings document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Borrowing wrapper used when rendering, so callers keep ownership.
#[derive(Serialize)]
struct DocumentRef<'a> {
    settings: &'a Settings,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Document {
    settings: Settings,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Renders `settings` as a settings document.
///
/// # Errors
///
/// Returns [`FormatError::Serialize`] if serialization fails.
///
/// # Examples
///
/// ```rust
/// use pvr_core::{parse_settings, render_settings, Settings};
///
/// let settings = Settings::new_default();
/// let text = render_settings(&settings).unwrap();
/// assert!(text.starts_with("[settings]"));
/// assert_eq!(parse_settings(&text).unwrap(), settings);
/// ```
pub fn render_settings(settings: &Settings) -> Result<String, FormatError> {
    let text = toml::to_string_pretty(&DocumentRef { settings })?;
    trace!(bytes = text.len(), "rendered settings document");
    Ok(text)
}

/// Parses a settings document.
///
/// Keys missing from `[settings]` come back empty.  The `[settings]` table
/// itself is required.
///
/// # Errors
///
/// Returns [`FormatError::Parse`] if `text` is not TOML, lacks the
/// `[settings]` table, has unknown keys, or has values of the wrong type.
pub fn parse_settings(text: &str) -> Result<Settings, FormatError> {
    let document: Document = toml::from_str(text)?;
    trace!(
        extensions = document.settings.extensions.len(),
        "parsed settings document"
    );
    Ok(document.settings)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses rendered text back into a generic TOML table for shape checks.
    fn as_table(text: &str) -> toml::Table {
        text.parse::<toml::Table>().expect("rendered text must be TOML")
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    #[test]
    fn test_render_has_single_settings_root_table() {
        // Arrange
        let settings = Settings::new_default();

        // Act
        let table = as_table(&render_settings(&settings).expect("render"));

        // Assert
        assert_eq!(table.len(), 1);
        assert!(table.contains_key("settings"));
    }

    #[test]
    fn test_render_lists_each_extension_once_in_order() {
        // Arrange
        let settings = Settings {
            extensions: vec![".pvr".into(), ".ktx".into(), ".pvr.ccz".into()],
            default_search_path: "/in".into(),
            default_out_directory: "/out".into(),
        };

        // Act
        let table = as_table(&render_settings(&settings).expect("render"));
        let inner = table["settings"].as_table().expect("settings table");

        // Assert
        let keys: Vec<&str> = inner.keys().map(String::as_str).collect();
        assert_eq!(inner.len(), 3, "no extraneous keys, got {keys:?}");
        let exts: Vec<&str> = inner["extensions"]
            .as_array()
            .expect("extensions array")
            .iter()
            .map(|v| v.as_str().expect("string entry"))
            .collect();
        assert_eq!(exts, vec![".pvr", ".ktx", ".pvr.ccz"]);
        assert_eq!(inner["default_search_path"].as_str(), Some("/in"));
        assert_eq!(inner["default_out_directory"].as_str(), Some("/out"));
    }

    #[test]
    fn test_render_keeps_field_declaration_order() {
        let text = render_settings(&Settings::new_default()).expect("render");

        let ext = text.find("extensions").expect("extensions key");
        let search = text.find("default_search_path").expect("search key");
        let out = text.find("default_out_directory").expect("out key");

        assert!(ext < search && search < out, "unexpected order:\n{text}");
    }

    #[test]
    fn test_render_empty_extension_list() {
        let settings = Settings {
            extensions: Vec::new(),
            ..Settings::new_default()
        };

        let table = as_table(&render_settings(&settings).expect("render"));

        let exts = table["settings"]["extensions"].as_array().expect("array");
        assert!(exts.is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let settings = Settings {
            extensions: vec![".b".into(), ".a".into()],
            default_search_path: "C:\\Textures".into(),
            default_out_directory: "out dir".into(),
        };

        let first = render_settings(&settings).expect("render");
        let second = render_settings(&settings).expect("render");

        assert_eq!(first, second);
    }

    // ── Parsing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_full_document() {
        let text = r#"
[settings]
extensions = [".pvr", ".ktx"]
default_search_path = "/data/in"
default_out_directory = "/data/out"
"#;

        let settings = parse_settings(text).expect("parse");

        assert_eq!(settings.extensions, vec![".pvr", ".ktx"]);
        assert_eq!(settings.default_search_path, "/data/in");
        assert_eq!(settings.default_out_directory, "/data/out");
    }

    #[test]
    fn test_parse_missing_keys_are_empty_not_defaults() {
        // Only the root table is present; nothing is merged from new_default().
        let settings = parse_settings("[settings]\n").expect("parse");

        assert!(settings.extensions.is_empty());
        assert_eq!(settings.default_search_path, "");
        assert_eq!(settings.default_out_directory, "");
    }

    #[test]
    fn test_parse_rejects_missing_root_table() {
        let result = parse_settings("extensions = [\".pvr\"]\n");
        assert!(matches!(result, Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_empty_text() {
        assert!(matches!(parse_settings(""), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_key_in_settings() {
        let text = "[settings]\nextensions = []\ntheme = \"dark\"\n";
        assert!(matches!(parse_settings(text), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_top_level_table() {
        let text = "[settings]\n\n[window]\nwidth = 800\n";
        assert!(matches!(parse_settings(text), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_wrong_value_type() {
        let text = "[settings]\nextensions = \".pvr\"\n";
        assert!(matches!(parse_settings(text), Err(FormatError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_non_toml() {
        let text = "<?xml version=\"1.0\"?>\n<Settings><Extensions/></Settings>";
        assert!(matches!(parse_settings(text), Err(FormatError::Parse(_))));
    }

    // ── from_serialized ───────────────────────────────────────────────────────

    #[test]
    fn test_from_serialized_rejects_invalid_utf8() {
        let bytes = [b'[', 0xFF, 0xFE, b']'];
        let result = Settings::from_serialized(&bytes);
        assert!(matches!(result, Err(FormatError::Encoding(_))));
    }

    #[test]
    fn test_from_serialized_reads_rendered_bytes() {
        let settings = Settings {
            extensions: vec!["\"quoted\"".into(), "tab\there".into()],
            default_search_path: "ünïcödé/路径".into(),
            default_out_directory: "line1\nline2\\".into(),
        };
        let text = settings.render().expect("render");

        let restored = Settings::from_serialized(text.as_bytes()).expect("parse");

        assert_eq!(restored, settings);
    }
}
