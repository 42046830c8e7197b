//! # pvr-core
//!
//! Shared library for the PVR converter containing the `Settings` entity and
//! the text document format it is persisted in.
//!
//! This crate performs no file-system access.  Reading and writing the
//! settings file is the job of the `pvr-converter` storage layer, which calls
//! [`Settings::render`] and [`Settings::from_serialized`] on either side of a
//! single scoped file handle.
//!
//! # Architecture overview
//!
//! - **`domain`** – The `Settings` record itself: default construction, the
//!   accepted-extension list and the helpers that match file names against it.
//!
//! - **`format`** – How a `Settings` value becomes text and back.  The
//!   document is TOML with one root table named after the entity:
//!
//!   ```toml
//!   [settings]
//!   extensions = [
//!       ".pvr",
//!   ]
//!   default_search_path = ""
//!   default_out_directory = ""
//!   ```

pub mod domain;
pub mod format;

pub use domain::settings::{Settings, DEFAULT_EXTENSION};
pub use format::document::{parse_settings, render_settings, FormatError};
