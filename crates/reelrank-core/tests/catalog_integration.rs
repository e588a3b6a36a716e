//! Catalog loading integration tests
//!
//! Unit tests in `src/catalog.rs` cover parsing from strings; these tests
//! cover the filesystem path: loading library files from disk, the error
//! shapes for missing and malformed files, and the fallback feed.

use std::io::Write;

use reelrank_core::{Catalog, CatalogError, MediaKind};
use tempfile::TempDir;

/// Write a library file into a temp dir and return its path
fn write_library(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create library file");
    file.write_all(contents.as_bytes()).expect("write library");
    path
}

#[test]
fn test_load_library_file() {
    let dir = TempDir::new().unwrap();
    let path = write_library(
        &dir,
        "library.json",
        r#"[
            {"id": 10, "title": "Alpha", "release_date": "2021-03-04", "vote_average": 6.4},
            {"id": 11, "title": "Beta", "media_type": "tv", "recently_added": true}
        ]"#,
    );

    let catalog = Catalog::load(&path).expect("library loads");
    assert_eq!(catalog.len(), 2);

    let alpha = catalog.require(10).expect("Alpha present");
    assert_eq!(alpha.display_year(), Some(2021));
    assert_eq!(alpha.display_rating(), Some(6.4));

    let beta = catalog.require(11).expect("Beta present");
    assert_eq!(beta.media_type, MediaKind::Tv);
    assert!(beta.recently_added);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Catalog::load(dir.path().join("nope.json"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_library(&dir, "broken.json", "[{\"id\": 1}");
    let result = Catalog::load(&path);
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_load_entry_missing_title_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_library(&dir, "untitled.json", r#"[{"id": 1}]"#);
    let result = Catalog::load(&path);
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_rank_order_matches_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_library(
        &dir,
        "ordered.json",
        r#"[
            {"id": 3, "title": "Third by id, first by rank"},
            {"id": 1, "title": "Middle"},
            {"id": 2, "title": "Last"}
        ]"#,
    );

    let catalog = Catalog::load(&path).expect("ordered library loads");
    let ids: Vec<u64> = catalog.trending().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![3, 1, 2], "rank is file position, not id order");
}

#[test]
fn test_bundled_feed_matches_load_of_same_bytes() {
    // The fallback feed must behave identically to a library file holding
    // the same JSON.
    let dir = TempDir::new().unwrap();
    let bundled = Catalog::bundled();
    let path = write_library(
        &dir,
        "copy.json",
        include_str!("../data/trending.json"),
    );
    let loaded = Catalog::load(&path).expect("copied feed loads");
    assert_eq!(bundled, loaded);
}
