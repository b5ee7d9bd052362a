//! Tests for DocumentStore
//!
//! These tests verify:
//! - Save then load returns the content verbatim
//! - Loading a missing document fails with NotFound
//! - Saves overwrite (last write wins) and are idempotent
//! - Companion files and parent directory creation
//! - I/O failures surface as errors, never as empty content

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use docstore::config::Config;
use docstore::error::DocError;
use docstore::protocol::{DocumentContent, DocumentLocator};
use docstore::store::{DocumentStore, RootedPath};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_fixed_store() -> (TempDir, PathBuf, DocumentStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("document.json");
    let store = DocumentStore::new(&path);
    (temp_dir, path, store)
}

fn setup_rooted_store() -> (TempDir, DocumentStore) {
    let temp_dir = TempDir::new().unwrap();
    let policy = RootedPath::new(temp_dir.path()).reserve_extension("elm");
    let store = DocumentStore::with_policy(Box::new(policy)).create_parent_dirs(true);
    (temp_dir, store)
}

fn locator(path: &str) -> DocumentLocator {
    DocumentLocator::new(path)
}

fn content(text: &str) -> DocumentContent {
    DocumentContent::new(text)
}

// =============================================================================
// Load/Save Tests
// =============================================================================

#[test]
fn test_save_then_load() {
    let (_temp, path, store) = setup_fixed_store();

    store.save(&locator("/doc/a"), &content(r#"{"x":1}"#)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"x":1}"#);
    assert_eq!(store.load(&locator("/doc/a")).unwrap().as_str(), r#"{"x":1}"#);
}

#[test]
fn test_round_trip_preserves_bytes() {
    let (_temp, _path, store) = setup_fixed_store();

    let samples = [
        "",
        " ",
        "\n\n",
        "no trailing newline",
        "{\"nodes\":[{\"ref\":1,\"value\":\"Hole\"}]}\n",
        "tabs\tand\r\nCRLF",
        "unicode: λx. x ∘ 🦀",
    ];
    for text in samples {
        store.save(&locator(""), &content(text)).unwrap();
        assert_eq!(store.load(&locator("")).unwrap().as_str(), text);
    }
}

#[test]
fn test_load_missing_is_not_found() {
    let (_temp, path, store) = setup_fixed_store();

    let result = store.load(&locator("/doc/a"));

    match result {
        Err(DocError::NotFound { path: missing }) => assert_eq!(missing, path),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_save_overwrites() {
    let (_temp, _path, store) = setup_fixed_store();

    store.save(&locator("a"), &content("a much longer first version")).unwrap();
    store.save(&locator("a"), &content("short")).unwrap();

    assert_eq!(store.load(&locator("a")).unwrap().as_str(), "short");
}

#[test]
fn test_save_is_idempotent() {
    let (_temp, path, store) = setup_fixed_store();

    store.save(&locator("a"), &content("same")).unwrap();
    store.save(&locator("a"), &content("same")).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "same");
}

#[test]
fn test_fixed_store_shares_one_file() {
    let (_temp, _path, store) = setup_fixed_store();

    store.save(&locator("/one"), &content("shared")).unwrap();

    assert_eq!(store.load(&locator("/two")).unwrap().as_str(), "shared");
}

#[test]
fn test_load_rereads_disk() {
    let (_temp, path, store) = setup_fixed_store();

    store.save(&locator(""), &content("v1")).unwrap();
    fs::write(&path, "edited outside").unwrap();

    assert_eq!(store.load(&locator("")).unwrap().as_str(), "edited outside");
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_save_missing_parent_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = DocumentStore::new(temp_dir.path().join("missing").join("doc.json"));

    let result = store.save(&locator(""), &content("x"));

    assert!(matches!(result, Err(DocError::IoAt { .. })));
}

#[test]
fn test_load_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = DocumentStore::new(temp_dir.path());

    let result = store.load(&locator(""));

    assert!(matches!(result, Err(DocError::IoAt { .. })));
}

#[test]
fn test_load_invalid_utf8_is_io_error() {
    let (_temp, path, store) = setup_fixed_store();
    fs::write(&path, [0xFF, 0xFE, 0x00]).unwrap();

    let result = store.load(&locator(""));

    assert!(matches!(result, Err(DocError::IoAt { .. })));
}

// =============================================================================
// Rooted Store Tests
// =============================================================================

#[test]
fn test_rooted_scenario() {
    let (temp, store) = setup_rooted_store();

    store.save(&locator("/doc/a"), &content(r#"{"x":1}"#)).unwrap();

    assert!(temp.path().join("doc").join("a").is_file());
    assert_eq!(store.load(&locator("/doc/a")).unwrap().as_str(), r#"{"x":1}"#);
}

#[test]
fn test_rooted_documents_are_separate() {
    let (_temp, store) = setup_rooted_store();

    store.save(&locator("a.json"), &content("A")).unwrap();
    store.save(&locator("b.json"), &content("B")).unwrap();

    assert_eq!(store.load(&locator("a.json")).unwrap().as_str(), "A");
    assert_eq!(store.load(&locator("b.json")).unwrap().as_str(), "B");
}

#[test]
fn test_rooted_rejects_traversal_before_touching_disk() {
    let (temp, store) = setup_rooted_store();

    let result = store.save(&locator("../escape.json"), &content("x"));

    assert!(matches!(result, Err(DocError::InvalidLocator(_))));
    assert!(!temp.path().parent().unwrap().join("escape.json").exists());
}

// =============================================================================
// Companion Tests
// =============================================================================

#[test]
fn test_companion_written_next_to_document() {
    let (temp, path, store) = setup_fixed_store();

    store
        .save_with_companion(&locator(""), &content("{}"), Some("main = text \"hi\""))
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    assert_eq!(
        fs::read_to_string(temp.path().join("document.elm")).unwrap(),
        "main = text \"hi\""
    );
}

#[test]
fn test_empty_companion_is_skipped() {
    let (temp, _path, store) = setup_fixed_store();

    store.save_with_companion(&locator(""), &content("{}"), Some("")).unwrap();
    store.save_with_companion(&locator(""), &content("{}"), None).unwrap();

    assert!(!temp.path().join("document.elm").exists());
}

#[test]
fn test_companion_path_never_collides() {
    let store = DocumentStore::new("/srv/main.elm");

    assert_eq!(
        store.companion_path(&PathBuf::from("/srv/main.elm")),
        PathBuf::from("/srv/main.elm.elm")
    );
    assert_eq!(
        store.companion_path(&PathBuf::from("/srv/doc.json")),
        PathBuf::from("/srv/doc.elm")
    );
}

#[test]
fn test_companion_failure_after_document_write() {
    let (temp, path, store) = setup_fixed_store();
    fs::create_dir(temp.path().join("document.elm")).unwrap();

    let result = store.save_with_companion(&locator(""), &content("new"), Some("rendered"));

    assert!(matches!(result, Err(DocError::IoAt { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    assert!(temp.path().join("document.elm").is_dir());
}

#[test]
fn test_rooted_companion_cannot_replace_document() {
    let (temp, store) = setup_rooted_store();

    let result = store.save(&locator("main.elm"), &content("doc B"));
    assert!(matches!(result, Err(DocError::InvalidLocator(_))));
    assert!(!temp.path().join("main.elm").exists());

    store
        .save_with_companion(&locator("main.json"), &content("doc A"), Some("rendered A"))
        .unwrap();
    assert_eq!(
        fs::read_to_string(temp.path().join("main.elm")).unwrap(),
        "rendered A"
    );
    assert!(matches!(
        store.load(&locator("main.elm")),
        Err(DocError::InvalidLocator(_))
    ));
}

#[test]
fn test_from_config_reserves_companion_extension_under_root() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .root_dir(temp_dir.path())
        .companion_extension("txt")
        .build();
    let store = DocumentStore::from_config(&config).unwrap();

    assert!(matches!(
        store.save(&locator("notes.TXT"), &content("x")),
        Err(DocError::InvalidLocator(_))
    ));
    store.save(&locator("notes.elm"), &content("x")).unwrap();
}

#[test]
fn test_from_config_uses_companion_extension() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .document_path(temp_dir.path().join("doc.json"))
        .companion_extension("txt")
        .build();
    let store = DocumentStore::from_config(&config).unwrap();

    store
        .save_with_companion(&locator(""), &content("{}"), Some("rendered"))
        .unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("doc.txt")).unwrap(),
        "rendered"
    );
}

#[test]
fn test_from_config_rejects_invalid() {
    let config = Config::builder().max_body_bytes(0).build();
    assert!(matches!(
        DocumentStore::from_config(&config),
        Err(DocError::Config(_))
    ));
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_saves_last_write_wins() {
    let (_temp, _path, store) = setup_fixed_store();
    let store = Arc::new(store);

    let versions: Vec<String> = (0..8).map(|i| format!("version-{}", i)).collect();
    let handles: Vec<_> = versions
        .iter()
        .cloned()
        .map(|text| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.save(&locator(""), &content(&text)).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // No merge: the file holds exactly one of the written versions
    let loaded = store.load(&locator("")).unwrap();
    assert!(versions.iter().any(|v| v == loaded.as_str()));
}
