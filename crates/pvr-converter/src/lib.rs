//! pvr-converter library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does pvr-converter do?
//!
//! The converter turns PVR texture files into regular images.  Before any
//! conversion runs it needs to know three things, all kept in a small settings
//! file next to the user's work:
//!
//! 1. Which file extensions count as PVR input (`.pvr` out of the box).
//! 2. Which directory to search for input when none is given.
//! 3. Which directory to write results to when none is given.
//!
//! This crate owns reading and writing that file, the commands that edit it,
//! and the discovery of input files it drives.

/// Application layer: use cases and the ports they depend on.
pub mod application;

/// Infrastructure layer: file-system adapters.
pub mod infrastructure;
