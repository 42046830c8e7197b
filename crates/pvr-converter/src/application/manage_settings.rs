//! ManageSettingsUseCase: display and edit the persisted settings.
//!
//! Every edit follows the same cycle:
//!
//! ```text
//! load  ──►  mutate in memory  ──►  save (only if something changed)
//! ```
//!
//! The updated settings are returned so the caller can echo them back to the
//! user without a second load.

use std::sync::Arc;

use pvr_core::{FormatError, Settings};
use thiserror::Error;
use tracing::{debug, info};

use crate::application::settings_repository::{SettingsRepository, StorageError};

/// Error type for settings use cases.
#[derive(Debug, Error)]
pub enum ManageSettingsError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// The Manage Settings use case.
pub struct ManageSettingsUseCase {
    repository: Arc<dyn SettingsRepository>,
}

impl ManageSettingsUseCase {
    /// Creates a new use case backed by `repository`.
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Returns the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`ManageSettingsError::Storage`] if loading fails.
    pub fn current(&self) -> Result<Settings, ManageSettingsError> {
        Ok(self.repository.load()?)
    }

    /// Returns the current settings rendered as a settings document.
    ///
    /// # Errors
    ///
    /// Returns [`ManageSettingsError`] if loading or rendering fails.
    pub fn show(&self) -> Result<String, ManageSettingsError> {
        let settings = self.repository.load()?;
        Ok(settings.render()?)
    }

    /// Adds `ext` to the accepted extensions.
    ///
    /// # Errors
    ///
    /// Returns [`ManageSettingsError::Storage`] if loading or saving fails.
    pub fn add_extension(&self, ext: &str) -> Result<Settings, ManageSettingsError> {
        self.update("add_extension", |s| s.add_extension(ext))
    }

    /// Removes `ext` from the accepted extensions.
    ///
    /// # Errors
    ///
    /// Returns [`ManageSettingsError::Storage`] if loading or saving fails.
    pub fn remove_extension(&self, ext: &str) -> Result<Settings, ManageSettingsError> {
        self.update("remove_extension", |s| s.remove_extension(ext))
    }

    /// Sets the default search directory.  The value is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ManageSettingsError::Storage`] if loading or saving fails.
    pub fn set_search_path(&self, dir: &str) -> Result<Settings, ManageSettingsError> {
        self.update("set_search_path", |s| replace(&mut s.default_search_path, dir))
    }

    /// Sets the default output directory.  The value is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ManageSettingsError::Storage`] if loading or saving fails.
    pub fn set_out_directory(&self, dir: &str) -> Result<Settings, ManageSettingsError> {
        self.update("set_out_directory", |s| {
            replace(&mut s.default_out_directory, dir)
        })
    }

    fn update<F>(&self, action: &str, mutate: F) -> Result<Settings, ManageSettingsError>
    where
        F: FnOnce(&mut Settings) -> bool,
    {
        let mut settings = self.repository.load()?;
        if mutate(&mut settings) {
            self.repository.save(&settings)?;
            info!(action, "settings updated");
        } else {
            debug!(action, "settings unchanged, skipping save");
        }
        Ok(settings)
    }
}

/// Stores `value` in `field`, returning whether it differed.
fn replace(field: &mut String, value: &str) -> bool {
    if field == value {
        return false;
    }
    *field = value.to_string();
    true
}
