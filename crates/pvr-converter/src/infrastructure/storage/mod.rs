//! Storage infrastructure: settings file persistence and source discovery.
//!
//! - `settings_file` reads and writes the TOML settings file at a
//!   caller-supplied path, writing first-run defaults when the file is absent.
//! - `source_dir` lists the regular files in a directory so the application
//!   layer can pick out the ones the settings accept.
//!
//! Keeping file-system concerns here means the application layer never opens
//! a file itself.

pub mod settings_file;
pub mod source_dir;

pub use settings_file::{load_settings, save_settings, SaveMode, SettingsFile};
pub use source_dir::{list_files, ScanError};
