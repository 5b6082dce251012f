//! Change Feed Module
//!
//! Defines the change events a collection watcher observes and the feed
//! they arrive on. The feed is a single-consumer sequence: subscribing
//! again replaces the previous subscriber, whose feed then ends.

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::models::Task;

// == Change Kind ==
/// The kind of write a change event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

// == Change Event ==
/// A notification that a write was committed against the task collection.
///
/// `full_document` carries the document as it exists after the change and is
/// present exactly for inserts.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// Which write happened
    pub kind: ChangeKind,
    /// Id of the affected document
    pub id: Uuid,
    /// The inserted document, for insert events
    pub full_document: Option<Task>,
}

impl ChangeEvent {
    /// Builds the event for a committed insert.
    pub fn inserted(task: Task) -> Self {
        Self {
            kind: ChangeKind::Insert,
            id: task.id,
            full_document: Some(task),
        }
    }

    /// Builds the event for a committed update.
    pub fn updated(id: Uuid) -> Self {
        Self {
            kind: ChangeKind::Update,
            id,
            full_document: None,
        }
    }

    /// Builds the event for a committed delete.
    pub fn deleted(id: Uuid) -> Self {
        Self {
            kind: ChangeKind::Delete,
            id,
            full_document: None,
        }
    }
}

// == Feed Types ==
/// Receiving half of a collection's change feed.
///
/// Events arrive in the commit order of the underlying writes. The feed is
/// infinite unless the subscription is replaced or the collection is dropped.
pub type TaskFeed = mpsc::UnboundedReceiver<ChangeEvent>;

/// Sending half, held by the collection next to its documents.
pub(crate) type FeedSender = mpsc::UnboundedSender<ChangeEvent>;
