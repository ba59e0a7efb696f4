use studydash_core::db::open_db;
use studydash_core::store::slot::SlotKey;
use studydash_core::{
    CollectionStore, MemorySlotBackend, Persistence, SlotBackend, SqliteSlotBackend,
    StorageError, StorageResult, Task, ThemePreference, ASSIGNMENTS, SYLLABUS, TASKS,
};

fn task(id: &str, text: &str, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        text: text.to_string(),
        completed,
    }
}

#[test]
fn get_after_set_returns_new_value_not_default() {
    let conn = studydash_core::db::open_db_in_memory().unwrap();
    let mut store = CollectionStore::new(SqliteSlotBackend::new(&conn));
    let value = vec![task("a", "Revise notes", false)];

    assert_eq!(store.set(&TASKS, value.clone()), Persistence::Durable);
    assert_eq!(store.get_or_init(&TASKS, Vec::new()), value);
}

#[test]
fn reopened_database_returns_last_written_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studydash.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut store = CollectionStore::new(SqliteSlotBackend::new(&conn));
        store.set(&TASKS, vec![task("a", "first", false)]);
        store.set(&TASKS, vec![task("b", "second", true)]);
    }

    let conn = open_db(&path).unwrap();
    let mut store = CollectionStore::new(SqliteSlotBackend::new(&conn));
    assert_eq!(
        store.get_or_init(&TASKS, Vec::new()),
        vec![task("b", "second", true)]
    );
    // Never written: default comes back.
    assert!(store.get_or_init(&ASSIGNMENTS, Vec::new()).is_empty());
}

#[test]
fn corrupt_payload_is_treated_as_absent() {
    let backend = MemorySlotBackend::new().with_payload("tasks", "{not json");
    let mut store = CollectionStore::new(backend);
    let fallback = vec![task("seed", "seed", false)];

    assert_eq!(store.get_or_init(&TASKS, fallback.clone()), fallback);
}

#[test]
fn wrongly_shaped_payload_is_treated_as_absent() {
    // Valid JSON, but `completed` is a string.
    let backend = MemorySlotBackend::new()
        .with_payload("tasks", r#"[{"id":"1","text":"x","completed":"yes"}]"#);
    let mut store = CollectionStore::new(backend);
    assert!(store.get_or_init(&TASKS, Vec::new()).is_empty());

    // Structurally valid, but ids collide.
    let backend = MemorySlotBackend::new().with_payload(
        "tasks",
        r#"[{"id":"1","text":"x","completed":true},{"id":"1","text":"y","completed":false}]"#,
    );
    let mut store = CollectionStore::new(backend);
    assert!(store.get_or_init(&TASKS, Vec::new()).is_empty());
}

#[test]
fn payloads_written_by_the_browser_layout_are_accepted() {
    let backend = MemorySlotBackend::new()
        .with_payload(
            "assignments",
            r#"[{"id":"1700000000000","title":"Essay","subject":"History","dueDate":"2024-03-01","status":"Overdue"}]"#,
        )
        .with_payload(
            "syllabus",
            r#"[{"id":"math","subject":"Calculus II","topics":[{"id":"m1","name":"Limits","completed":true}]}]"#,
        )
        .with_payload("theme", "dark");
    let mut store = CollectionStore::new(backend);

    let assignments = store.get_or_init(&ASSIGNMENTS, Vec::new());
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].due_date.to_string(), "2024-03-01");

    let syllabus = store.get_or_init(&SYLLABUS, Vec::new());
    assert_eq!(syllabus[0].topics[0].name, "Limits");

    assert_eq!(ThemePreference::load(&mut store, false), ThemePreference::Dark);
}

#[test]
fn failed_write_keeps_value_for_the_session_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readonly.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut store = CollectionStore::new(SqliteSlotBackend::new(&conn));
        store.set(&TASKS, vec![task("old", "old", false)]);
    }

    {
        let conn = open_db(&path).unwrap();
        conn.execute_batch("PRAGMA query_only = ON;").unwrap();
        let mut store = CollectionStore::new(SqliteSlotBackend::new(&conn));

        let new_value = vec![task("new", "new", true)];
        assert_eq!(store.set(&TASKS, new_value.clone()), Persistence::MemoryOnly);
        assert_eq!(store.get_or_init(&TASKS, Vec::new()), new_value);
    }

    let conn = open_db(&path).unwrap();
    let mut store = CollectionStore::new(SqliteSlotBackend::new(&conn));
    assert_eq!(
        store.get_or_init(&TASKS, Vec::new()),
        vec![task("old", "old", false)]
    );
}

struct UnreadableBackend;

impl SlotBackend for UnreadableBackend {
    fn read(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn write(&mut self, _key: &str, _payload: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn clear(&mut self) -> StorageResult<()> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(Vec::new())
    }
}

#[test]
fn disabled_storage_degrades_to_memory() {
    let mut store = CollectionStore::new(UnreadableBackend);
    let fallback = vec![task("seed", "seed", false)];
    assert_eq!(store.get_or_init(&TASKS, fallback.clone()), fallback);

    let value = vec![task("x", "x", true)];
    assert_eq!(store.set(&TASKS, value.clone()), Persistence::MemoryOnly);
    assert_eq!(store.get_or_init(&TASKS, fallback), value);

    assert!(store.reset_all().is_err());
    // Cache is dropped even though the medium refused the clear.
    assert!(store.get_or_init(&TASKS, Vec::new()).is_empty());
}

#[test]
fn reset_all_clears_every_slot() {
    let conn = studydash_core::db::open_db_in_memory().unwrap();
    let mut store = CollectionStore::new(SqliteSlotBackend::new(&conn));
    store.set(&TASKS, vec![task("a", "a", false)]);
    store.set(&ASSIGNMENTS, Vec::new());
    assert_eq!(
        store.persisted_keys().unwrap(),
        vec!["assignments".to_string(), "tasks".to_string()]
    );

    store.reset_all().unwrap();

    assert!(store.persisted_keys().unwrap().is_empty());
    let fallback = vec![task("seed", "seed", false)];
    assert_eq!(store.get_or_init(&TASKS, fallback.clone()), fallback);
}

#[test]
fn custom_keys_hold_independent_slots() {
    const DRAFTS: SlotKey<Vec<Task>> = SlotKey::new("drafts");
    let mut store = CollectionStore::new(MemorySlotBackend::new());

    store.set(&DRAFTS, vec![task("d", "draft", false)]);

    assert!(store.get_or_init(&TASKS, Vec::new()).is_empty());
    assert_eq!(store.get_or_init(&DRAFTS, Vec::new()).len(), 1);
    assert!(store.backend().payload("tasks").is_none());
}
