//! Infrastructure layer for the converter.
//!
//! Contains the file-system adapters.
//!
//! **Dependency rule**: this layer may depend on `application` and `pvr_core`,
//! but MUST NOT be imported by the `application` or domain layers.
//!
//! # Sub-modules
//!
//! - **`storage`** – The settings file (`SettingsFile`, an implementation of
//!   `SettingsRepository`) and the directory listing used to find sources.

pub mod storage;
