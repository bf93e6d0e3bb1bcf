//! End-to-end tests: a store built from config over the file backend.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use progress_store::{
    build_store, selectors, BackendConfig, FolderItem, FormDraftPatch, Hydration,
    PreferenceFlagsPatch, ProgressStoreApi, ProgressStoreConfig, StoreSnapshot, Theme,
};

const KEY: &str = "lifecycle-progress";

fn file_config(dir: &Path) -> ProgressStoreConfig {
    ProgressStoreConfig {
        storage_key: KEY.to_owned(),
        backend: BackendConfig::File {
            dir: dir.to_path_buf(),
        },
    }
}

fn slot_path(dir: &Path) -> std::path::PathBuf {
    dir.join(format!("{KEY}.json"))
}

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = file_config(dir.path());

    let first = build_store(&cfg).unwrap();
    assert_eq!(first.hydration(), Hydration::Fresh);
    first.mark_day_complete(2);
    first.mark_day_complete(7);
    first.add_folder_item(FolderItem::new("f1", "brief.pdf", "pdf").with_url("/files/brief.pdf"));
    first.set_form_field(FormDraftPatch::from([
        ("company".to_owned(), Some("Acme".to_owned())),
        ("website".to_owned(), None),
    ]));
    first.set_preference_flags(PreferenceFlagsPatch {
        theme: Some(Theme::Light),
        disable_shaders: Some(true),
        ..PreferenceFlagsPatch::default()
    });

    let second = build_store(&cfg).unwrap();
    assert_eq!(second.hydration(), Hydration::Restored);
    assert_eq!(second.snapshot(), first.snapshot());
    assert!(second.is_day_complete(7));
    assert!(!second.is_day_complete(3));
    assert!(!second.snapshot().form_data.contains_key("website"));
}

#[test]
fn test_persisted_layout_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = build_store(&file_config(dir.path())).unwrap();
    store.mark_day_complete(5);
    store.mark_day_complete(1);
    store.set_persona_mode_named("playful").unwrap();

    let raw = fs::read_to_string(slot_path(dir.path())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["completedDays"], serde_json::json!([1, 5]));
    assert_eq!(value["persona"]["mode"], "playful");
    assert_eq!(value["preferences"]["soundEnabled"], false);
    assert_eq!(value["preferences"]["disableShaders"], false);
    assert_eq!(value["folderItems"], serde_json::json!([]));
    assert_eq!(value["formData"], serde_json::json!({}));
    assert_eq!(value["profile"]["verified"], false);
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(slot_path(dir.path()), "{\"persona\": ").unwrap();

    let store = build_store(&file_config(dir.path())).unwrap();

    assert!(store.hydration().is_fallback());
    assert_eq!(store.snapshot(), StoreSnapshot::default());

    // The next mutation overwrites the corrupt slot with valid state.
    store.mark_day_complete(8);
    let restored = build_store(&file_config(dir.path())).unwrap();
    assert_eq!(restored.hydration(), Hydration::Restored);
    assert!(restored.is_day_complete(8));
}

#[test]
fn test_out_of_range_day_in_file_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = serde_json::to_value(StoreSnapshot::default()).unwrap();
    value["completedDays"] = serde_json::json!([1, 12]);
    fs::write(slot_path(dir.path()), value.to_string()).unwrap();

    let store = build_store(&file_config(dir.path())).unwrap();

    assert!(store.hydration().is_fallback());
    assert!(store.snapshot().completed_days.is_empty());
}

#[test]
fn test_reset_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = file_config(dir.path());
    let store = build_store(&cfg).unwrap();
    store.mark_day_complete(4);
    store.add_folder_item(FolderItem::new("f1", "a.txt", "text"));

    store.reset();

    let restored = build_store(&cfg).unwrap();
    assert_eq!(restored.snapshot(), StoreSnapshot::default());
}

#[test]
fn test_concurrent_completions_from_shared_client() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = file_config(dir.path());
    let store: Arc<dyn ProgressStoreApi> = build_store(&cfg).unwrap();

    let handles: Vec<_> = (1..=8u8)
        .map(|day| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.mark_day_complete(day))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }

    let snapshot = store.snapshot();
    assert!(selectors::all_days_complete(&snapshot));
    assert_eq!(snapshot.completed_days.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let restored = build_store(&cfg).unwrap();
    assert_eq!(restored.snapshot(), snapshot);
}

#[test]
fn test_unwritable_dir_keeps_in_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the storage directory should be.
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "not a directory").unwrap();

    let store = build_store(&file_config(&blocked)).unwrap();
    assert!(store.mark_day_complete(1));
    assert!(store.is_day_complete(1));
}
