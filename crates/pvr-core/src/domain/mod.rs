//! Domain entities for the PVR converter.
//!
//! This module contains pure data and business rules with no infrastructure
//! dependencies: nothing here opens files, reads environment variables or
//! writes logs to disk.  The storage and CLI layers depend on the domain, but
//! the domain never depends on them, which keeps it trivially unit-testable.

/// The persisted user settings.
///
/// See [`settings::Settings`] for the main type.
pub mod settings;
