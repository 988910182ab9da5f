use portal_table::store::{
    MemoryStore, PreferenceError, PreferenceProvider, PreferenceStore, SqliteStore,
};

fn exercise_backend(store: &dyn PreferenceStore) {
    assert_eq!(store.get_bytes("events_sort").unwrap(), None);

    store.set_bytes("events_sort", b"one".to_vec()).unwrap();
    store.set_bytes("events_pagination", b"two".to_vec()).unwrap();
    store.set_bytes("faq_sort", b"three".to_vec()).unwrap();
    assert_eq!(store.get_bytes("events_sort").unwrap(), Some(b"one".to_vec()));

    // Overwrite
    store.set_bytes("events_sort", b"uno".to_vec()).unwrap();
    assert_eq!(store.get_bytes("events_sort").unwrap(), Some(b"uno".to_vec()));

    assert_eq!(
        store.keys_with_prefix("events_").unwrap(),
        vec!["events_pagination".to_string(), "events_sort".to_string()]
    );

    store.delete("events_sort").unwrap();
    assert_eq!(store.get_bytes("events_sort").unwrap(), None);

    // Deleting a missing key is fine
    store.delete("never_written").unwrap();
}

#[test]
fn test_memory_store_contract() {
    let store = MemoryStore::new();
    exercise_backend(&store);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_sqlite_store_contract() {
    let store = SqliteStore::open_in_memory().unwrap();
    exercise_backend(&store);
}

#[test]
fn test_sqlite_prefix_is_literal() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.set_bytes("a_b", b"1".to_vec()).unwrap();
    store.set_bytes("axb", b"2".to_vec()).unwrap();
    store.set_bytes("A_B", b"3".to_vec()).unwrap();

    assert_eq!(store.keys_with_prefix("a_").unwrap(), vec!["a_b".to_string()]);
    assert_eq!(store.keys_with_prefix("").unwrap().len(), 3);
}

#[test]
fn test_memory_quota() {
    let store = MemoryStore::with_quota(20);
    store.set_bytes("key", vec![0; 10]).unwrap();

    // Replacing a value only counts the new size
    store.set_bytes("key", vec![0; 15]).unwrap();

    let err = store.set_bytes("other", vec![0; 5]).unwrap_err();
    match err {
        PreferenceError::QuotaExceeded { key, size, quota } => {
            assert_eq!(key, "other");
            assert_eq!(size, 28);
            assert_eq!(quota, 20);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(store.get_bytes("other").unwrap(), None);
}

#[test]
fn test_provider_typed_round_trip() {
    let prefs = PreferenceProvider::new(MemoryStore::new());

    prefs.set("sizes", &vec![10u32, 25, 50]).unwrap();
    assert_eq!(prefs.get::<Vec<u32>>("sizes").unwrap(), Some(vec![10, 25, 50]));
    assert_eq!(prefs.get::<Vec<u32>>("missing").unwrap(), None);
    assert_eq!(prefs.get_or("missing", 3u8).unwrap(), 3);

    prefs.delete("sizes").unwrap();
    assert!(prefs.keys_with_prefix("").unwrap().is_empty());
}

#[test]
fn test_provider_reports_bad_json() {
    let store = MemoryStore::new();
    store.set_bytes("n", b"oops".to_vec()).unwrap();
    let prefs = PreferenceProvider::new(store);

    let err = prefs.get::<u32>("n").unwrap_err();
    assert!(matches!(err, PreferenceError::Deserialization(_)));
    assert!(err.to_string().starts_with("deserialization error"));
}

#[test]
fn test_sqlite_store_reopens_from_disk() {
    let path = std::env::temp_dir().join(format!(
        "portal-table-prefs-{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let store = SqliteStore::open(&path).unwrap();
        store.set_bytes("events_pagination", br#"{"itemsPerPage":25}"#.to_vec()).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(
        store.get_bytes("events_pagination").unwrap(),
        Some(br#"{"itemsPerPage":25}"#.to_vec())
    );

    drop(store);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_memory_quota_holds_under_concurrent_writers() {
    let store = MemoryStore::with_quota(100);

    std::thread::scope(|scope| {
        for writer in 0..16 {
            let store = &store;
            scope.spawn(move || {
                for round in 0..50 {
                    let key = format!("w{:02}_{}", writer, round % 4);
                    let _ = store.set_bytes(&key, vec![0; 10]);
                }
            });
        }
    });

    assert!(store.used_bytes() <= 100, "used {} bytes", store.used_bytes());
    assert!(!store.is_empty());
}
