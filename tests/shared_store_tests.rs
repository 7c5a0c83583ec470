//! Concurrency tests for `SharedTaskStore`.

use std::thread;

use rstest::rstest;
use task_tracker::{Priority, SharedTaskStore, Status, StoreError, TaskId};

const WORKERS: i64 = 8;
const TASKS_PER_WORKER: i64 = 50;

#[rstest]
fn test_concurrent_adds_are_all_stored() {
    let store = SharedTaskStore::new();

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                for offset in 0..TASKS_PER_WORKER {
                    let id = TaskId::new(worker * TASKS_PER_WORKER + offset);
                    store.add_task(id, "Concurrent", None, None, None).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let count = usize::try_from(WORKERS * TASKS_PER_WORKER).unwrap();
    assert_eq!(store.task_count(), count);
    assert_eq!(store.all_tasks().len(), count);
}

#[rstest]
fn test_concurrent_duplicate_adds_accept_exactly_one() {
    let store = SharedTaskStore::new();

    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || store.add_task(TaskId::new(1), "Race", None, None, None))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let accepted = results.iter().filter(|result| result.is_ok()).count();
    let rejected = results
        .iter()
        .filter(|result| matches!(result, Err(StoreError::DuplicateId(_))))
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(rejected, results.len() - 1);
    assert_eq!(store.task_count(), 1);
}

#[rstest]
fn test_concurrent_updates_are_serialized() {
    let store = SharedTaskStore::new();
    store
        .add_task(TaskId::new(1), "Counter", None, Some(Priority::Low), None)
        .unwrap();

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..TASKS_PER_WORKER {
                    store
                        .update_task(TaskId::new(1), |task| task.add_tag(format!("w{worker}")))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let task = store.try_get_task_by_id(TaskId::new(1)).unwrap();
    assert_eq!(
        task.tag_count(),
        usize::try_from(WORKERS * TASKS_PER_WORKER).unwrap()
    );
    assert_eq!(task.status, Status::Todo);
    assert_eq!(store.tasks_by_priority(Priority::Low).len(), 1);
}

#[rstest]
fn test_update_missing_task_from_thread() {
    let store = SharedTaskStore::new();
    let handle = store.clone();

    let result = thread::spawn(move || handle.update_task(TaskId::new(999), |task| task))
        .join()
        .unwrap();

    assert_eq!(result, Err(StoreError::NotFound(TaskId::new(999))));
    assert_eq!(store.task_count(), 0);
}
