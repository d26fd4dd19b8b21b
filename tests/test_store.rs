use healthd::store::{DeleteOutcome, Record, RecordStore};
use tempfile::TempDir;

fn record(name: &str, age: &str, gender: &str, disease: &str) -> Record {
    Record {
        name: name.to_string(),
        age: age.to_string(),
        gender: gender.to_string(),
        disease: disease.to_string(),
    }
}

fn store_in(dir: &TempDir) -> RecordStore {
    RecordStore::new(dir.path().join("records.txt"))
}

#[tokio::test]
async fn test_append_creates_file_lazily() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(!store.path().exists());

    store.append(&record("Alice", "30", "F", "None")).await.unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents, "Alice,30,F,None\n");
}

#[tokio::test]
async fn test_append_then_list_assigns_positional_ids() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(&record("Alice", "30", "F", "None")).await.unwrap();
    store.append(&record("Bob", "45", "M", "Flu")).await.unwrap();

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 0);
    assert_eq!(records[0].name, "Alice");
    assert_eq!(records[1].id, 1);
    assert_eq!(records[1].name, "Bob");
}

#[tokio::test]
async fn test_list_absent_file_is_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let records = store.list().await.unwrap();

    assert!(records.is_empty());
    assert_eq!(serde_json::to_string(&records).unwrap(), "[]");
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_list_skips_malformed_lines_without_consuming_ids() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    std::fs::write(
        store.path(),
        "Alice,30,F,None\nnot a record\nBob,45,M,Flu\n",
    )
    .unwrap();

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Alice");
    assert_eq!(records[0].id, 0);
    assert_eq!(records[1].name, "Bob");
    assert_eq!(records[1].id, 1);
}

#[tokio::test]
async fn test_list_serializes_to_expected_json() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(&record("Alice", "30", "F", "None")).await.unwrap();

    let records = store.list().await.unwrap();
    assert_eq!(
        serde_json::to_string(&records).unwrap(),
        r#"[{"id":0,"name":"Alice","age":"30","gender":"F","disease":"None"}]"#
    );
}

#[tokio::test]
async fn test_json_escapes_special_characters() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(&record("Al\"ice", "30", "F", "None")).await.unwrap();

    let records = store.list().await.unwrap();
    let json = serde_json::to_string(&records).unwrap();

    assert!(json.contains(r#""name":"Al\"ice""#));
    // Still valid JSON
    serde_json::from_str::<serde_json::Value>(&json).unwrap();
}

#[tokio::test]
async fn test_delete_removes_exactly_one_line_and_shifts_ids() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(&record("Alice", "30", "F", "None")).await.unwrap();
    store.append(&record("Bob", "45", "M", "Flu")).await.unwrap();
    store.append(&record("Carol", "52", "F", "Cold")).await.unwrap();

    let outcome = store.delete(1).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!((records[0].id, records[0].name.as_str()), (0, "Alice"));
    assert_eq!((records[1].id, records[1].name.as_str()), (1, "Carol"));
}

#[tokio::test]
async fn test_delete_last_record_leaves_empty_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(&record("Alice", "30", "F", "None")).await.unwrap();

    assert_eq!(store.delete(0).await.unwrap(), DeleteOutcome::Deleted);

    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "");
    assert_eq!(
        serde_json::to_string(&store.list().await.unwrap()).unwrap(),
        "[]"
    );
}

#[tokio::test]
async fn test_delete_out_of_range_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(&record("Alice", "30", "F", "None")).await.unwrap();
    let before = std::fs::read(store.path()).unwrap();

    assert_eq!(store.delete(5).await.unwrap(), DeleteOutcome::OutOfRange);

    let after = std::fs::read(store.path()).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_on_absent_file_does_not_create_it() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert_eq!(store.delete(0).await.unwrap(), DeleteOutcome::NoStore);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_delete_addresses_raw_lines() {
    // Delete positions count every line, including ones list() would skip.
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    std::fs::write(store.path(), "not a record\nAlice,30,F,None\n").unwrap();

    assert_eq!(store.delete(0).await.unwrap(), DeleteOutcome::Deleted);
    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "Alice,30,F,None\n"
    );
}

#[tokio::test]
async fn test_concurrent_appends_all_land() {
    let dir = TempDir::new().unwrap();
    let store = std::sync::Arc::new(store_in(&dir));

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = std::sync::Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .append(&record(&format!("p{i}"), "1", "x", "none"))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list().await.unwrap().len(), 10);
}
