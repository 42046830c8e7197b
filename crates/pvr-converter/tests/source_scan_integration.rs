//! Integration tests for source discovery.
//!
//! Exercises `list_files` + `select_sources` + `plan_conversions` together
//! against a real directory tree.

use std::path::{Path, PathBuf};

use pvr_converter::application::plan_conversion::{
    plan_conversions, resolve_search_dir, select_sources,
};
use pvr_converter::infrastructure::storage::list_files;
use pvr_core::Settings;
use uuid::Uuid;

fn make_tree() -> PathBuf {
    let root = std::env::temp_dir().join(format!("pvr_scan_it_{}", Uuid::new_v4()));
    std::fs::create_dir_all(root.join("sub")).unwrap();
    for name in ["b.pvr", "a.PVR", "c.ktx", "notes.txt", "sub/d.pvr"] {
        std::fs::write(root.join(name), b"").unwrap();
    }
    root
}

#[test]
fn test_scan_default_search_path_selects_accepted_files_only() {
    // Arrange
    let root = make_tree();
    let settings = Settings {
        default_search_path: root.to_string_lossy().into_owned(),
        ..Settings::new_default()
    };

    // Act
    let dir = resolve_search_dir(None, &settings);
    let sources = select_sources(list_files(&dir).unwrap(), &settings);

    // Assert
    assert_eq!(sources, vec![root.join("a.PVR"), root.join("b.pvr")]);
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn test_plan_uses_out_override_over_stored_directory() {
    let root = make_tree();
    let settings = Settings {
        extensions: vec![".ktx".into()],
        default_search_path: String::new(),
        default_out_directory: "/stored".into(),
    };

    let sources = select_sources(list_files(&root).unwrap(), &settings);
    let plans = plan_conversions(&sources, Some(Path::new("/override")), &settings);

    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].source, root.join("c.ktx"));
    assert_eq!(plans[0].out_dir, PathBuf::from("/override"));
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn test_plan_without_out_directory_writes_next_to_source() {
    let root = make_tree();
    let settings = Settings::new_default();

    let sources = select_sources(list_files(&root).unwrap(), &settings);
    let plans = plan_conversions(&sources, None, &settings);

    assert!(!plans.is_empty());
    assert!(plans.iter().all(|p| p.out_dir == root));
    std::fs::remove_dir_all(&root).ok();
}
