//! Integration tests for SnapshotStore.
//!
//! These tests verify that a session survives a save/load cycle on disk.

use std::fs;

use chrono::{NaiveDate, TimeZone, Utc};
use eventscout_api::discovery::EventQuery;
use eventscout_core::{FeedOrigin, Session, Snapshot, SnapshotStore, SnapshotStoreError};
use tempfile::tempdir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 16).unwrap()
}

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("session.json");
    let store = SnapshotStore::with_path(path.clone());

    let mut snapshot = Snapshot::seeded(today());
    snapshot.query = Some(EventQuery::new().city("Boston").size(10));
    snapshot.fetched_at = Some(Utc.with_ymd_and_hms(2025, 4, 16, 12, 0, 0).unwrap());
    snapshot.origin = FeedOrigin::Live;

    store.save(&snapshot).expect("failed to save snapshot");
    assert!(path.exists(), "session file should exist after save");

    let loaded = store.load().expect("failed to load snapshot");
    assert_eq!(loaded, snapshot);
}

#[test]
fn test_ledger_changes_persist() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = SnapshotStore::with_path(temp_dir.path().join("session.json"));

    let mut snapshot = store.load_or_seed(today()).expect("seed");
    let event_id = snapshot.events.iter().next().map(|e| e.id.clone()).unwrap();
    let friend_id = snapshot.directory[0].id.clone();

    let mut session = Session::new(snapshot.user.clone());
    session.attend_event(&snapshot.events, &event_id);
    session.add_friend(&snapshot.directory, &friend_id);
    snapshot.user = session.into_user();
    store.save(&snapshot).expect("save");

    let reloaded = store.load_or_seed(today()).expect("reload");
    assert!(reloaded.user.is_attending(&event_id));
    assert!(reloaded.user.is_friend(&friend_id));
    assert_eq!(reloaded.user.points, snapshot.user.points);
}

#[test]
fn test_file_is_pretty_json_with_camel_case() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("session.json");
    let store = SnapshotStore::with_path(path.clone());

    store.save(&Snapshot::seeded(today())).expect("save");

    let contents = fs::read_to_string(&path).expect("read");
    assert!(contents.contains('\n'));
    assert!(contents.contains("\"attendedEvents\""));
    assert!(contents.contains("\"pointsForAttending\""));
    assert!(contents.contains("\"origin\": \"seed\""));
}

#[test]
fn test_corrupt_file_is_reported() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("session.json");
    fs::write(&path, "[]").expect("write");

    let result = SnapshotStore::with_path(path).load();
    assert!(matches!(result, Err(SnapshotStoreError::Json(_))));
}
