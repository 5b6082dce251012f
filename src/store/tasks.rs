//! Task Collection Module
//!
//! Document storage for tasks plus the change feed the realtime layer
//! consumes. Writes and feed emission happen under the same write lock, so
//! a watcher observes events in commit order, one event per write.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::models::{NewTask, Task, TaskPatch};
use crate::store::feed::{ChangeEvent, FeedSender, TaskFeed};

// == Task Collection ==
/// The task collection: documents keyed by id, with an optional single
/// change-feed subscriber.
#[derive(Debug, Default)]
pub struct TaskCollection {
    inner: RwLock<TaskInner>,
}

#[derive(Debug, Default)]
struct TaskInner {
    documents: HashMap<Uuid, Task>,
    feed: Option<FeedSender>,
}

impl TaskInner {
    /// Emits a change event to the active subscriber, if any.
    ///
    /// Called with the write lock held so events leave in commit order.
    /// A subscriber that went away is forgotten; its events are discarded.
    fn emit(&mut self, event: ChangeEvent) {
        if let Some(tx) = &self.feed {
            if tx.send(event).is_err() {
                self.feed = None;
            }
        }
    }
}

impl TaskCollection {
    // == Constructor ==
    /// Creates an empty task collection with no feed subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    // == Watch ==
    /// Subscribes to the collection's change feed.
    ///
    /// The returned feed yields one event per committed write, in commit
    /// order, starting with the first write after subscription (no replay).
    /// Only one subscriber is active at a time: subscribing again replaces
    /// the previous one, whose feed ends.
    pub async fn watch(&self) -> TaskFeed {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.write().await;
        inner.feed = Some(tx);
        rx
    }

    // == Insert ==
    /// Inserts a new task, assigning its id and creation timestamp.
    ///
    /// Emits one insert event carrying the full document as persisted.
    pub async fn insert(&self, new: NewTask) -> Task {
        let task = Task {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            category: new.category,
            email: new.email,
            timestamp: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.documents.insert(task.id, task.clone());
        inner.emit(ChangeEvent::inserted(task.clone()));

        task
    }

    // == Find By Email ==
    /// Returns all tasks owned by the given email, oldest first.
    pub async fn find_by_email(&self, email: &str) -> Vec<Task> {
        let inner = self.inner.read().await;
        let mut tasks: Vec<Task> = inner
            .documents
            .values()
            .filter(|task| task.email == email)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        tasks
    }

    // == Update ==
    /// Applies a partial-field update to the task with the given id.
    ///
    /// Returns `true` iff a document matched. Emits one update event when it
    /// did; a non-matching id leaves the feed untouched.
    pub async fn update(&self, id: Uuid, patch: TaskPatch) -> bool {
        let mut inner = self.inner.write().await;
        let matched = match inner.documents.get_mut(&id) {
            Some(task) => {
                patch.apply(task);
                true
            }
            None => false,
        };
        if matched {
            inner.emit(ChangeEvent::updated(id));
        }
        matched
    }

    // == Delete ==
    /// Removes the task with the given id.
    ///
    /// Returns `true` iff a document matched. Emits one delete event when it
    /// did.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        if inner.documents.remove(&id).is_some() {
            inner.emit(ChangeEvent::deleted(id));
            true
        } else {
            false
        }
    }

    // == Length ==
    /// Returns the current number of task documents.
    pub async fn len(&self) -> usize {
        self.inner.read().await.documents.len()
    }

    /// Returns true if the collection holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.documents.is_empty()
    }
}
