//! PVR Converter — command-line entry point.
//!
//! Manages the converter's settings file and lists the PVR sources those
//! settings select.
//!
//! # Usage
//!
//! ```text
//! pvr-converter [--settings <FILE>] <COMMAND>
//!
//! Commands:
//!   show                    Print the current settings document
//!   add-ext <EXT>           Accept files with extension EXT
//!   remove-ext <EXT>        Stop accepting files with extension EXT
//!   set-search-path <DIR>   Set the default search directory
//!   set-out-dir <DIR>       Set the default output directory
//!   scan [DIR]              List accepted source files
//!   plan [DIR] [--out DIR]  List accepted source files with their output directory
//! ```
//!
//! The settings file is created with defaults on first use.
//!
//! # Environment variables
//!
//! | Variable       | Default         | Description                 |
//! |----------------|-----------------|-----------------------------|
//! | `PVR_SETTINGS` | `settings.toml` | Settings file path          |
//! | `RUST_LOG`     | `info`          | `tracing` filter directives |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pvr_converter::application::manage_settings::ManageSettingsUseCase;
use pvr_converter::application::plan_conversion::{
    plan_conversions, resolve_search_dir, select_sources,
};
use pvr_converter::infrastructure::storage::{list_files, SettingsFile};
use pvr_core::Settings;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// PVR texture converter.
#[derive(Debug, Parser)]
#[command(
    name = "pvr-converter",
    about = "Manage PVR converter settings and discover PVR source files",
    version
)]
struct Cli {
    /// Path of the settings file.  Created with defaults if it does not exist.
    #[arg(long, short, default_value = "settings.toml", env = "PVR_SETTINGS")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current settings document.
    Show,
    /// Accept files with the given extension (e.g. `.pvr.ccz`).
    AddExt { ext: String },
    /// Stop accepting files with the given extension.
    RemoveExt { ext: String },
    /// Set the directory searched when `scan`/`plan` get no directory.
    SetSearchPath { dir: String },
    /// Set the directory output goes to when `plan` gets no `--out`.
    SetOutDir { dir: String },
    /// List accepted source files.
    Scan {
        /// Directory to search instead of the default search path.
        dir: Option<PathBuf>,
    },
    /// List accepted source files together with their output directory.
    Plan {
        /// Directory to search instead of the default search path.
        dir: Option<PathBuf>,
        /// Output directory instead of the default output directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings_path = cli.settings.clone();
    let use_case = ManageSettingsUseCase::new(Arc::new(SettingsFile::new(&settings_path)));
    let context = || format!("settings file {}", settings_path.display());

    match cli.command {
        Command::Show => {
            let text = use_case.show().with_context(context)?;
            print!("{text}");
        }
        Command::AddExt { ext } => {
            let settings = use_case.add_extension(&ext).with_context(context)?;
            print_extensions(&settings);
        }
        Command::RemoveExt { ext } => {
            let settings = use_case.remove_extension(&ext).with_context(context)?;
            print_extensions(&settings);
        }
        Command::SetSearchPath { dir } => {
            let settings = use_case.set_search_path(&dir).with_context(context)?;
            println!("default_search_path = {:?}", settings.default_search_path);
        }
        Command::SetOutDir { dir } => {
            let settings = use_case.set_out_directory(&dir).with_context(context)?;
            println!("default_out_directory = {:?}", settings.default_out_directory);
        }
        Command::Scan { dir } => {
            let settings = use_case.current().with_context(context)?;
            for source in find_sources(dir, &settings)? {
                println!("{}", source.display());
            }
        }
        Command::Plan { dir, out } => {
            let settings = use_case.current().with_context(context)?;
            let sources = find_sources(dir, &settings)?;
            for plan in plan_conversions(&sources, out.as_deref(), &settings) {
                println!("{} -> {}", plan.source.display(), plan.out_dir.display());
            }
        }
    }

    Ok(())
}

fn find_sources(dir: Option<PathBuf>, settings: &Settings) -> anyhow::Result<Vec<PathBuf>> {
    let search_dir = resolve_search_dir(dir.as_deref(), settings);
    let candidates = list_files(&search_dir)
        .with_context(|| format!("scanning {}", search_dir.display()))?;
    let sources = select_sources(candidates, settings);
    info!(
        dir = %search_dir.display(),
        found = sources.len(),
        "source scan complete"
    );
    Ok(sources)
}

fn print_extensions(settings: &Settings) {
    println!("extensions = {:?}", settings.extensions);
}
