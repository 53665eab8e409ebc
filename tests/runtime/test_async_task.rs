//! Tests for async task runtime primitives.

use github_scoring::runtime::{AsyncTask, TaskDropped};

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_async_task_ready() {
    let task = AsyncTask::ready("done");
    assert_eq!(task.await, Ok("done"));
}

#[tokio::test]
async fn test_async_task_dropped_sender() {
    let (tx, rx) = tokio::sync::oneshot::channel::<u8>();
    drop(tx);
    assert_eq!(AsyncTask::new(rx).await, Err(TaskDropped));
}

fn boom() -> u8 {
    panic!("task failed")
}

#[tokio::test]
async fn test_async_task_panic_is_reported() {
    let task = AsyncTask::spawn_async(async { boom() });
    assert_eq!(task.await, Err(TaskDropped));
}
