//! TOML-based settings persistence.
//!
//! Reads and writes [`Settings`] at a caller-supplied path.  The document
//! format itself lives in `pvr_core::format`; this module only moves bytes
//! between that format and the disk.
//!
//! # First run
//!
//! [`load_settings`] on a path with no file writes `Settings::new_default()`
//! there (as a *new* file) and then reads it back, so the user always ends up
//! with an editable settings file after the first launch.
//!
//! # Save modes
//!
//! | Mode                   | File absent | File present           |
//! |------------------------|-------------|------------------------|
//! | [`SaveMode::Overwrite`] | created     | truncated and replaced  |
//! | [`SaveMode::CreateNew`] | created     | `AlreadyExists` error   |
//!
//! Writes are not atomic: a crash mid-write can leave a truncated file, which
//! the next load reports as a format error.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use pvr_core::Settings;
use tracing::{debug, info};

use crate::application::settings_repository::{SettingsRepository, StorageError};

/// How [`save_settings`] treats an existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Create the file or replace its contents.
    #[default]
    Overwrite,
    /// Create the file; fail if it already exists.
    CreateNew,
}

/// Loads settings from `path`, writing defaults there first if no file exists.
///
/// # Errors
///
/// Returns [`StorageError::Io`] if the path cannot be checked, created or
/// read, and [`StorageError::Format`] if the file is not a settings document.
/// An existing but invalid file is never replaced with defaults.
pub fn load_settings(path: &Path) -> Result<Settings, StorageError> {
    if !path.try_exists().map_err(io_error(path))? {
        info!(path = %path.display(), "settings file not found, writing defaults");
        save_settings(&Settings::new_default(), path, SaveMode::CreateNew)?;
    }

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(io_error(path))?;

    let settings = Settings::from_serialized(&bytes).map_err(|source| StorageError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        extensions = settings.extensions.len(),
        "settings loaded"
    );
    Ok(settings)
}

/// Writes `settings` to `path`.
///
/// # Errors
///
/// Returns [`StorageError::Io`] on file-system failure, including an existing
/// file under [`SaveMode::CreateNew`], and [`StorageError::Format`] if the
/// settings cannot be rendered.
pub fn save_settings(settings: &Settings, path: &Path, mode: SaveMode) -> Result<(), StorageError> {
    let content = settings.render().map_err(|source| StorageError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    let mut options = OpenOptions::new();
    options.write(true);
    match mode {
        SaveMode::Overwrite => options.create(true).truncate(true),
        SaveMode::CreateNew => options.create_new(true),
    };

    let mut file = options.open(path).map_err(io_error(path))?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(io_error(path))?;

    debug!(path = %path.display(), ?mode, "settings saved");
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// ── Repository adapter ────────────────────────────────────────────────────────

/// [`SettingsRepository`] backed by a single settings file.
///
/// Saves through this adapter overwrite the file.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepository for SettingsFile {
    fn load(&self) -> Result<Settings, StorageError> {
        load_settings(&self.path)
    }

    fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        save_settings(settings, &self.path, SaveMode::Overwrite)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
