//! Settings document format: TOML text with a single `[settings]` root table.

pub mod document;

pub use document::{parse_settings, render_settings, FormatError};
