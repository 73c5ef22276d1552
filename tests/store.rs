#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use taskmaster::libs::store::TaskStore;
    use taskmaster::libs::task::{FixedClock, SequentialIds, Task, TaskCounts, TaskFilter};
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        store: TaskStore,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap());
            StoreTestContext {
                store: TaskStore::with_capabilities(Vec::new(), Box::new(SequentialIds::new("task")), Box::new(clock)),
            }
        }
    }

    fn texts(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|task| task.text.clone()).collect()
    }

    fn assert_counts_consistent(store: &TaskStore) {
        let counts = store.counts();
        assert_eq!(counts.all, counts.active + counts.completed);
        assert_eq!(store.filtered_view(TaskFilter::All).len(), counts.all);
        assert_eq!(store.filtered_view(TaskFilter::Active).len(), counts.active);
        assert_eq!(store.filtered_view(TaskFilter::Completed).len(), counts.completed);
        assert_eq!(counts, TaskCounts::of(&store.tasks()));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_adds_create_unique_active_tasks(ctx: &mut StoreTestContext) {
        for i in 0..25 {
            ctx.store.add(format!("task {}", i));
        }

        let tasks = ctx.store.tasks();
        assert_eq!(tasks.len(), 25);
        assert!(tasks.iter().all(|task| !task.completed));
        let ids: HashSet<&str> = tasks.iter().map(|task| task.id.as_str()).collect();
        assert_eq!(ids.len(), 25);
        assert_eq!(tasks[0].text, "task 0");
        assert_eq!(tasks[24].text, "task 24");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_accepts_empty_text(ctx: &mut StoreTestContext) {
        let id = ctx.store.add("");

        assert_eq!(ctx.store.get(&id).unwrap().text, "");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_sets_creation_time_from_clock(ctx: &mut StoreTestContext) {
        let id = ctx.store.add("buy milk");

        assert_eq!(ctx.store.get(&id).unwrap().created_at, Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_twice_restores(ctx: &mut StoreTestContext) {
        let id = ctx.store.add("buy milk");
        ctx.store.add("walk dog");

        assert!(ctx.store.toggle(&id));
        assert!(ctx.store.get(&id).unwrap().completed);
        assert!(ctx.store.toggle(&id));
        assert!(!ctx.store.get(&id).unwrap().completed);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_toggle_unknown_id_is_noop(ctx: &mut StoreTestContext) {
        let id = ctx.store.add("buy milk");
        ctx.store.toggle(&id);
        ctx.store.add("walk dog");
        let before = ctx.store.tasks();

        assert!(!ctx.store.toggle("missing"));

        assert_eq!(*ctx.store.tasks(), *before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_edit_changes_only_text(ctx: &mut StoreTestContext) {
        let id = ctx.store.add("buy milk");
        ctx.store.toggle(&id);
        let before = ctx.store.get(&id).unwrap().clone();

        assert!(ctx.store.edit(&id, "buy oat milk"));

        let after = ctx.store.get(&id).unwrap();
        assert_eq!(after.text, "buy oat milk");
        assert_eq!(after.completed, before.completed);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.id, before.id);

        assert!(!ctx.store.edit("missing", "x"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_removes_exactly_one(ctx: &mut StoreTestContext) {
        let ids: Vec<String> = ["a", "b", "c", "d"].iter().map(|text| ctx.store.add(*text)).collect();

        assert!(ctx.store.delete(&ids[1]));

        assert_eq!(texts(&ctx.store.filtered_view(TaskFilter::All)), vec!["a", "c", "d"]);
        assert!(ctx.store.get(&ids[1]).is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_unknown_id_is_noop(ctx: &mut StoreTestContext) {
        ctx.store.add("a");
        ctx.store.add("b");
        let before = ctx.store.tasks();

        assert!(!ctx.store.delete("missing"));

        assert_eq!(*ctx.store.tasks(), *before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_clear_completed_is_idempotent(ctx: &mut StoreTestContext) {
        let ids: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|text| ctx.store.add(*text)).collect();
        ctx.store.toggle(&ids[0]);
        ctx.store.toggle(&ids[3]);

        assert_eq!(ctx.store.clear_completed(), 2);
        let once = ctx.store.tasks();
        assert_eq!(ctx.store.clear_completed(), 0);

        assert_eq!(*ctx.store.tasks(), *once);
        assert_eq!(texts(&ctx.store.filtered_view(TaskFilter::All)), vec!["b", "c", "e"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_counts_stay_consistent(ctx: &mut StoreTestContext) {
        assert_counts_consistent(&ctx.store);

        let ids: Vec<String> = (0..10).map(|i| ctx.store.add(format!("task {}", i))).collect();
        assert_counts_consistent(&ctx.store);

        for id in ids.iter().step_by(3) {
            ctx.store.toggle(id);
        }
        assert_counts_consistent(&ctx.store);

        ctx.store.delete(&ids[1]);
        ctx.store.delete(&ids[3]);
        assert_counts_consistent(&ctx.store);

        ctx.store.clear_completed();
        assert_counts_consistent(&ctx.store);
        assert_eq!(ctx.store.counts().completed, 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_filtered_views_preserve_order(ctx: &mut StoreTestContext) {
        let ids: Vec<String> = ["a", "b", "c", "d"].iter().map(|text| ctx.store.add(*text)).collect();
        ctx.store.toggle(&ids[2]);
        ctx.store.toggle(&ids[0]);

        assert_eq!(texts(&ctx.store.filtered_view(TaskFilter::All)), vec!["a", "b", "c", "d"]);
        assert_eq!(texts(&ctx.store.filtered_view(TaskFilter::Active)), vec!["b", "d"]);
        assert_eq!(texts(&ctx.store.filtered_view(TaskFilter::Completed)), vec!["a", "c"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_milk_and_dog_scenario(ctx: &mut StoreTestContext) {
        let milk = ctx.store.add("buy milk");
        ctx.store.add("walk dog");
        ctx.store.toggle(&milk);

        assert_eq!(texts(&ctx.store.filtered_view(TaskFilter::Active)), vec!["walk dog"]);
        assert_eq!(texts(&ctx.store.filtered_view(TaskFilter::Completed)), vec!["buy milk"]);
        assert_eq!(ctx.store.counts(), TaskCounts { all: 2, active: 1, completed: 1 });
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_every_mutation_is_published(ctx: &mut StoreTestContext) {
        let mut changes = ctx.store.subscribe();

        let id = ctx.store.add("buy milk");
        assert!(changes.has_changed().unwrap());
        assert_eq!(changes.borrow_and_update().len(), 1);

        ctx.store.toggle(&id);
        assert!(changes.borrow_and_update()[0].completed);

        ctx.store.delete(&id);
        assert!(changes.borrow_and_update().is_empty());
    }
}
