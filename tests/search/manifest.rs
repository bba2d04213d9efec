//! Loading index content from disk.

use super::common::FIXTURE_MANIFEST;
use nexus_search::{load_manifest, parse_manifest, Category, IndexError, IndexManifest};
use std::fs;

#[test]
fn test_fixture_loads_in_order() {
    let index = load_manifest(FIXTURE_MANIFEST).unwrap();
    assert_eq!(index.get(0).map(|e| e.title()), Some("NEXUS"));
    assert_eq!(index.pages().len(), 6);
    assert!(index.iter().all(|e| !e.title().trim().is_empty()));
}

#[test]
fn test_corpus_invariant_holds_for_fixture() {
    let index = load_manifest(FIXTURE_MANIFEST).unwrap();
    for entry in index.iter() {
        assert!(entry.corpus().contains(&entry.title().to_lowercase()));
        assert!(entry.corpus().contains(&entry.group_name().to_lowercase()));
        assert!(entry.corpus().contains(&entry.description().to_lowercase()));
    }
}

#[test]
fn test_load_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.json");
    let manifest = IndexManifest {
        version: 1,
        entries: vec![nexus_search::testing::make_input("Boot Stages", Category::Section)],
    };
    fs::write(&path, serde_json::to_string(&manifest).unwrap()).unwrap();

    let index = load_manifest(&path).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(0).unwrap().destination(), "/docs/boot-stages");
}

#[test]
fn test_bad_entry_fails_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.json");
    fs::write(
        &path,
        r#"{"version": 1, "entries": [
            {"title": "Ok", "destination": "/ok", "groupName": "G", "category": "page"},
            {"title": "Nowhere", "destination": "", "groupName": "G", "category": "page"}
        ]}"#,
    )
    .unwrap();

    let err = load_manifest(&path).unwrap_err();
    assert!(matches!(err, IndexError::EmptyDestination { position: 1, .. }));
}

#[test]
fn test_wrong_version() {
    let err = parse_manifest(r#"{"version": 0, "entries": []}"#).unwrap_err();
    assert!(err.to_string().contains("unsupported manifest version 0"));
}
