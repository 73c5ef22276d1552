#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use taskmaster::db::db::Db;
    use taskmaster::db::error::StorageError;
    use taskmaster::db::kv::{KeyValueStore, MemoryStore, SqliteStore};
    use taskmaster::db::tasks::{TaskRepository, DEFAULT_STORAGE_KEY};
    use taskmaster::libs::data_storage::DataStorage;
    use taskmaster::libs::store::TaskStore;
    use taskmaster::libs::task::{SequentialIds, SystemClock, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PersistenceTestContext {
        temp_dir: TempDir,
        memory: Arc<MemoryStore>,
        repository: TaskRepository,
    }

    impl TestContext for PersistenceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let memory = Arc::new(MemoryStore::new());
            let repository = TaskRepository::new(memory.clone(), DEFAULT_STORAGE_KEY);
            PersistenceTestContext { temp_dir, memory, repository }
        }
    }

    fn sample_tasks() -> Vec<Task> {
        let mut store = TaskStore::with_capabilities(Vec::new(), Box::new(SequentialIds::new("task")), Box::new(SystemClock));
        let milk = store.add("buy milk");
        store.add("walk dog");
        store.add("");
        store.toggle(&milk);
        store.tasks().as_ref().clone()
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_load_absent_record_is_empty(ctx: &mut PersistenceTestContext) {
        assert!(ctx.repository.load().is_empty());
        assert!(ctx.repository.try_load().unwrap().is_empty());
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_save_then_load_round_trips(ctx: &mut PersistenceTestContext) {
        let tasks = sample_tasks();

        ctx.repository.save(&tasks);

        assert_eq!(ctx.repository.load(), tasks);
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_save_overwrites_previous_record(ctx: &mut PersistenceTestContext) {
        let tasks = sample_tasks();
        ctx.repository.save(&tasks);
        ctx.repository.save(&tasks[..1]);

        assert_eq!(ctx.repository.load(), tasks[..1].to_vec());
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_not_json_loads_empty(ctx: &mut PersistenceTestContext) {
        ctx.memory.set(DEFAULT_STORAGE_KEY, "not json").unwrap();

        assert!(ctx.repository.load().is_empty());
        assert!(matches!(ctx.repository.try_load(), Err(StorageError::Decode(_))));
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_unexpected_shapes_load_empty(ctx: &mut PersistenceTestContext) {
        for raw in [
            r#"{"todos": []}"#,
            r#"[1, 2, 3]"#,
            r#"[{"id": "a", "text": "t", "completed": false}]"#,
            r#"[{"id": "a", "text": "t", "completed": false, "createdAt": "not a date"}]"#,
        ] {
            ctx.memory.set(DEFAULT_STORAGE_KEY, raw).unwrap();
            assert!(ctx.repository.load().is_empty(), "expected empty load for {}", raw);
        }
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_reads_records_written_by_browsers(ctx: &mut PersistenceTestContext) {
        let raw = r#"[{"id":"0b6c2a9e-1d8f-4c55-a1f3-7e1b2c3d4e5f","text":"buy milk","completed":true,"createdAt":"2024-11-02T17:45:12.345Z"}]"#;
        ctx.memory.set(DEFAULT_STORAGE_KEY, raw).unwrap();

        let tasks = ctx.repository.load();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "buy milk");
        assert!(tasks[0].completed);
        assert_eq!(
            tasks[0].created_at,
            Utc.with_ymd_and_hms(2024, 11, 2, 17, 45, 12).unwrap() + chrono::Duration::milliseconds(345)
        );
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_stored_record_field_names(ctx: &mut PersistenceTestContext) {
        ctx.repository.save(&sample_tasks()[..1]);

        let raw = ctx.memory.raw(DEFAULT_STORAGE_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = value[0].as_object().unwrap();
        let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
        keys.sort();

        assert_eq!(keys, vec!["completed", "createdAt", "id", "text"]);
        assert!(record["createdAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_rejected_write_is_swallowed(ctx: &mut PersistenceTestContext) {
        let tasks = sample_tasks();
        ctx.repository.save(&tasks[..1]);
        ctx.memory.reject_writes(true);

        ctx.repository.save(&tasks);

        assert!(matches!(ctx.repository.try_save(&tasks), Err(StorageError::WriteRejected(_))));
        assert_eq!(ctx.repository.load(), tasks[..1].to_vec());
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_sqlite_store_survives_reopen(ctx: &mut PersistenceTestContext) {
        let storage = DataStorage::at(ctx.temp_dir.path());
        let tasks = sample_tasks();

        {
            let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::new(Db::open(&storage).unwrap()));
            TaskRepository::new(kv, DEFAULT_STORAGE_KEY).save(&tasks);
        }

        let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::new(Db::open(&storage).unwrap()));
        assert_eq!(TaskRepository::new(kv, DEFAULT_STORAGE_KEY).load(), tasks);
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_keys_are_independent(ctx: &mut PersistenceTestContext) {
        let other = TaskRepository::new(ctx.memory.clone(), "work");
        ctx.repository.save(&sample_tasks());

        assert!(other.load().is_empty());
        assert_eq!(other.key(), "work");
    }

    #[test_context(PersistenceTestContext)]
    #[test]
    fn test_store_starts_from_repository(ctx: &mut PersistenceTestContext) {
        let tasks = sample_tasks();
        ctx.repository.save(&tasks);

        let store = TaskStore::load(&ctx.repository);

        assert_eq!(*store.tasks(), tasks);
    }
}
