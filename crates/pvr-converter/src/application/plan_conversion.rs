//! PlanConversionUseCase: choose source files and output directories.
//!
//! Directory precedence, highest first:
//!
//! | Directory | 1st                | 2nd                     | Fallback              |
//! |-----------|--------------------|-------------------------|-----------------------|
//! | search    | command-line value | `default_search_path`   | `.`                   |
//! | output    | command-line value | `default_out_directory` | source file's parent  |
//!
//! Empty strings in the settings mean "not set".  Nothing here touches the
//! file system: listing a directory is done by the infrastructure layer and
//! the result is handed to [`select_sources`].

use std::path::{Path, PathBuf};

use pvr_core::Settings;

/// A single source file and the directory its converted output goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    pub source: PathBuf,
    pub out_dir: PathBuf,
}

/// Returns the directory to search for source files.
pub fn resolve_search_dir(override_dir: Option<&Path>, settings: &Settings) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if settings.default_search_path.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&settings.default_search_path)
    }
}

/// Returns the directory `source`'s converted output is written to.
pub fn resolve_out_dir(override_dir: Option<&Path>, settings: &Settings, source: &Path) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if !settings.default_out_directory.is_empty() {
        return PathBuf::from(&settings.default_out_directory);
    }
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Keeps the candidates whose extension the settings accept, sorted by path.
pub fn select_sources(candidates: Vec<PathBuf>, settings: &Settings) -> Vec<PathBuf> {
    let mut sources: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|path| settings.accepts(path))
        .collect();
    sources.sort();
    sources
}

/// Pairs each source with its output directory.
pub fn plan_conversions(
    sources: &[PathBuf],
    out_override: Option<&Path>,
    settings: &Settings,
) -> Vec<ConversionPlan> {
    sources
        .iter()
        .map(|source| ConversionPlan {
            source: source.clone(),
            out_dir: resolve_out_dir(out_override, settings, source),
        })
        .collect()
}
