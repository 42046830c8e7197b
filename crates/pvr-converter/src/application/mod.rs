//! Application layer use cases for the converter.
//!
//! Use cases in this layer orchestrate the `Settings` entity from `pvr-core`
//! to fulfil a user goal.  They depend on the [`settings_repository`] trait
//! rather than on the file system, so the storage backend can be swapped (or
//! mocked in tests) without touching this code.
//!
//! # Sub-modules
//!
//! - **`settings_repository`** – The port through which settings are loaded
//!   and saved, plus its error type.
//!
//! - **`manage_settings`** – Show the current settings and apply single-field
//!   edits (add/remove an extension, change a default directory).
//!
//! - **`plan_conversion`** – Decide which directory to search, which of its
//!   files are PVR sources, and where each one's output goes.

pub mod manage_settings;
pub mod plan_conversion;
pub mod settings_repository;
