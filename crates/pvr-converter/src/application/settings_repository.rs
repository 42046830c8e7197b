//! SettingsRepository: the port through which use cases load and save settings.

use std::path::PathBuf;

use pvr_core::{FormatError, Settings};
use thiserror::Error;

/// Error type for settings persistence.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred (missing directory, permission
    /// denied, or the file already exists when creating a new one).
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but its content is not a settings document.
    #[error("invalid settings file {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

impl StorageError {
    /// Returns the I/O error kind, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::Format { .. } => None,
        }
    }
}

/// Storage-agnostic access to the persisted settings.
///
/// The file-backed implementation lives in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync {
    /// Loads the settings, initialising the store with defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read or holds invalid
    /// content.
    fn load(&self) -> Result<Settings, StorageError>;

    /// Persists `settings`, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), StorageError>;
}
