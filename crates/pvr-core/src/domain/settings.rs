//! The `Settings` entity: accepted file extensions plus the default search and
//! output directories.
//!
//! `Settings` is a plain data record.  All fields are public and carry no
//! invariants beyond their types: paths are free-form strings and are never
//! checked for existence, and the extension list may be empty.
//!
//! # Two ways to construct
//!
//! - [`Settings::new_default`] builds the first-run values (`[".pvr"]` and two
//!   empty paths).  The storage layer writes these to disk when no settings
//!   file exists yet.
//! - [`Settings::from_serialized`] parses a settings document.  Keys missing
//!   from the document come back as empty values, **not** as the first-run
//!   defaults: a stored file is taken as-is.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::document::{parse_settings, render_settings, FormatError};

/// Extension accepted by a freshly created settings file.
pub const DEFAULT_EXTENSION: &str = ".pvr";

/// User settings persisted between runs of the converter.
///
/// Field order is the order the fields appear in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// File extensions that identify PVR input files (e.g. `".pvr"`).
    ///
    /// Order is preserved across save/load but only membership matters.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Directory searched for input files when no directory is given.
    #[serde(default)]
    pub default_search_path: String,

    /// Directory converted files are written to when no directory is given.
    #[serde(default)]
    pub default_out_directory: String,
}

impl Settings {
    /// Returns the first-run settings.
    ///
    /// | Field                   | Value      |
    /// |-------------------------|------------|
    /// | `extensions`            | `[".pvr"]` |
    /// | `default_search_path`   | `""`       |
    /// | `default_out_directory` | `""`       |
    pub fn new_default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            default_search_path: String::new(),
            default_out_directory: String::new(),
        }
    }

    /// Parses a settings document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Encoding`] if `bytes` is not UTF-8 and
    /// [`FormatError::Parse`] if the text is not a settings document.
    pub fn from_serialized(bytes: &[u8]) -> Result<Self, FormatError> {
        let text = std::str::from_utf8(bytes)?;
        parse_settings(text)
    }

    /// Renders these settings to the same text `save` writes to disk.
    ///
    /// Pure: the file system is never touched, and rendering an unmodified
    /// value twice yields identical text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Serialize`] if the TOML serializer rejects the
    /// value.
    pub fn render(&self) -> Result<String, FormatError> {
        render_settings(self)
    }

    /// Returns `true` if `path` has an extension listed in [`Self::extensions`].
    ///
    /// Comparison is ASCII case-insensitive and ignores a leading `.` on the
    /// configured entry, so `"pvr"`, `".pvr"` and `".PVR"` all accept
    /// `texture.pvr`.  A path with no extension is never accepted.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|entry| extension_matches(entry, ext))
    }

    /// Appends `ext` unless an equivalent entry is already listed.
    ///
    /// Returns `true` if the list changed.
    pub fn add_extension(&mut self, ext: &str) -> bool {
        let wanted = strip_dot(ext);
        if self
            .extensions
            .iter()
            .any(|entry| extension_matches(entry, wanted))
        {
            return false;
        }
        self.extensions.push(ext.to_string());
        true
    }

    /// Removes every entry equivalent to `ext`.
    ///
    /// Returns `true` if the list changed.
    pub fn remove_extension(&mut self, ext: &str) -> bool {
        let wanted = strip_dot(ext);
        let before = self.extensions.len();
        self.extensions
            .retain(|entry| !extension_matches(entry, wanted));
        self.extensions.len() != before
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new_default()
    }
}

impl fmt::Display for Settings {
    /// Writes the rendered settings document.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

fn strip_dot(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// `candidate` is a bare extension as returned by [`Path::extension`].
fn extension_matches(entry: &str, candidate: &str) -> bool {
    let entry = strip_dot(entry);
    !entry.is_empty() && entry.eq_ignore_ascii_case(candidate)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
