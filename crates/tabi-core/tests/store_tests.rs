use tabi_core::{seed, Store, TripError};
use tempfile::NamedTempFile;

/// Helper function to create a temporary store for testing
fn create_test_store() -> (NamedTempFile, Store) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let store = Store::open(temp_file.path()).expect("Failed to open test store");
    (temp_file, store)
}

#[test]
fn test_load_trip_is_none_on_first_run() {
    let (_temp_file, store) = create_test_store();

    let loaded = store.load_trip().expect("Failed to load trip");
    assert!(loaded.is_none());
}

#[test]
fn test_save_then_load_round_trips() {
    let (_temp_file, store) = create_test_store();
    let document = seed::seed_trip().expect("Failed to build seed");

    store.save_trip(&document).expect("Failed to save trip");
    let loaded = store
        .load_trip()
        .expect("Failed to load trip")
        .expect("Trip should exist after save");

    assert_eq!(loaded, document);
}

#[test]
fn test_save_overwrites_wholesale() {
    let (_temp_file, store) = create_test_store();
    let document = seed::seed_trip().expect("Failed to build seed");

    store.save_trip(&document).expect("Failed to save trip");

    // Save a renamed document with an emptied schedule; the old record must
    // be gone entirely, not merged.
    let mut replacement = document.with_trip_name("改名之旅");
    replacement.schedule.clear();
    store.save_trip(&replacement).expect("Failed to overwrite trip");

    let loaded = store
        .load_trip()
        .expect("Failed to load trip")
        .expect("Trip should exist");
    assert_eq!(loaded.trip_name, "改名之旅");
    assert!(loaded.schedule.is_empty());
    assert_eq!(loaded.bookings.len(), 4);
}

#[test]
fn test_reopen_sees_persisted_document() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let document = seed::seed_trip().expect("Failed to build seed");

    {
        let store = Store::open(temp_file.path()).expect("Failed to open store");
        store.save_trip(&document).expect("Failed to save trip");
    }

    let store = Store::open(temp_file.path()).expect("Failed to reopen store");
    let loaded = store
        .load_trip()
        .expect("Failed to load trip")
        .expect("Trip should persist across opens");
    assert_eq!(loaded, document);
}

#[test]
fn test_open_unusable_path_is_storage_unavailable() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    // A directory cannot be opened as a database file.
    let error = Store::open(temp_dir.path()).expect_err("Opening a directory must fail");
    assert!(matches!(error, TripError::StorageUnavailable { .. }));
    assert!(error.is_unavailable());
}

#[test]
fn test_corrupt_record_is_a_serialization_error() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

    {
        let connection =
            rusqlite::Connection::open(temp_file.path()).expect("Failed to open raw connection");
        connection
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS trip_store (key TEXT PRIMARY KEY, value TEXT NOT NULL);
                 INSERT INTO trip_store (key, value) VALUES ('current_trip', 'not json');",
            )
            .expect("Failed to plant corrupt record");
    }

    let store = Store::open(temp_file.path()).expect("Failed to open store");
    let error = store.load_trip().expect_err("Corrupt record must not parse");
    assert!(matches!(error, TripError::Serialization { .. }));
}
