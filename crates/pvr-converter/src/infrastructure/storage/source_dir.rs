//! Directory listing for source discovery.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Error type for directory scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Lists the regular files directly inside `dir` (non-recursive).
///
/// Symlinks are followed; anything that does not resolve to a regular file
/// is skipped.  Order is whatever the OS returns.
///
/// # Errors
///
/// Returns [`ScanError::Io`] if `dir` cannot be read.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let to_scan_error = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(to_scan_error)? {
        let path = entry.map_err(to_scan_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    debug!(dir = %dir.display(), count = files.len(), "listed directory");
    Ok(files)
}
