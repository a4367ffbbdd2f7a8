//! In-memory task store
use chrono::Utc;
use tokio::sync::RwLock;

use crate::tasks::types::{CreateTaskRequest, Task};

/// Owns the task collection and the id counter. Both sit behind a single
/// lock: list takes a read guard, every mutation takes a write guard, so no
/// caller ever observes a partial update or a skipped id.
#[derive(Debug)]
pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    tasks: Vec<Task>,
    next_id: i64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Appends a new task with the next id and a fresh `createdAt` stamp.
    /// Ids start at 1 and are never reused, even after deletes.
    pub async fn create(&self, request: CreateTaskRequest) -> Task {
        let mut inner = self.inner.write().await;
        let task = Task {
            id: inner.next_id,
            title: request.title,
            description: request.description,
            completed: false,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        task
    }

    /// Overwrites `completed` on the matching task. `completed` is the only
    /// field that ever changes after creation.
    pub async fn set_completed(&self, id: i64, completed: bool) -> Option<Task> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = completed;
        Some(task.clone())
    }

    /// Removes the matching task, silently ignoring unknown ids.
    pub async fn remove(&self, id: i64) {
        let mut inner = self.inner.write().await;
        inner.tasks.retain(|t| t.id != id);
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn ids_are_monotonic_and_never_reused() {
        let store = TaskStore::new();
        let a = store.create(request("a")).await;
        let b = store.create(request("b")).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        store.remove(b.id).await;
        let c = store.create(request("c")).await;
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order_after_delete() {
        let store = TaskStore::new();
        store.create(request("a")).await;
        let b = store.create(request("b")).await;
        store.create(request("c")).await;

        store.remove(b.id).await;
        let titles: Vec<String> = store.list().await.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn new_tasks_default_to_not_completed() {
        let store = TaskStore::new();
        let task = store.create(request("a")).await;
        assert!(!task.completed);
        assert_eq!(task.description, "");
    }

    #[tokio::test]
    async fn set_completed_is_idempotent() {
        let store = TaskStore::new();
        let task = store.create(request("a")).await;

        let first = store.set_completed(task.id, true).await.unwrap();
        let second = store.set_completed(task.id, true).await.unwrap();
        assert!(first.completed);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn set_completed_on_unknown_id_changes_nothing() {
        let store = TaskStore::new();
        store.create(request("a")).await;

        assert!(store.set_completed(99, true).await.is_none());
        let tasks = store.list().await;
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);
    }

    #[tokio::test]
    async fn remove_on_unknown_id_is_a_noop() {
        let store = TaskStore::new();
        store.create(request("a")).await;
        store.remove(42).await;
        assert_eq!(store.list().await.len(), 1);
    }
}
