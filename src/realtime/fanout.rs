//! Insert Fanout Task
//!
//! Background task bridging the task collection's change feed to the
//! connected realtime clients: insert events are pushed to every client as
//! a "taskAdded" message, everything else is discarded.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::realtime::ClientRegistry;
use crate::store::{ChangeEvent, ChangeKind, Store};

/// Event name clients receive for a newly inserted task.
pub const TASK_ADDED_EVENT: &str = "taskAdded";

/// First resubscribe delay after the feed ends.
const RESUBSCRIBE_INITIAL: Duration = Duration::from_secs(1);
/// Resubscribe delay cap.
const RESUBSCRIBE_MAX: Duration = Duration::from_secs(30);

/// Spawns the background task that consumes the task change feed and fans
/// insert events out to connected clients.
///
/// The task subscribes to the feed and pulls events in a loop. If the feed
/// ends (the subscription was replaced or otherwise lost), it logs a warning
/// and resubscribes with exponential backoff; the backoff resets once events
/// flow again. The loop runs until the handle is aborted during shutdown.
///
/// # Arguments
/// * `store` - Shared store whose task collection is watched
/// * `registry` - Registry of connected clients to publish to
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_fanout_task(store: Arc<Store>, registry: Arc<ClientRegistry>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut delay = RESUBSCRIBE_INITIAL;

        loop {
            let mut feed = store.tasks().watch().await;
            info!("subscribed to task change feed");

            while let Some(event) = feed.recv().await {
                delay = RESUBSCRIBE_INITIAL;
                on_change_event(&registry, event).await;
            }

            warn!(
                "task change feed closed, resubscribing in {}s",
                delay.as_secs()
            );
            tokio::time::sleep(delay).await;
            delay = (delay * 2).min(RESUBSCRIBE_MAX);
        }
    })
}

/// Handles one change event: inserts are broadcast, the rest are dropped.
async fn on_change_event(registry: &ClientRegistry, event: ChangeEvent) {
    if event.kind != ChangeKind::Insert {
        debug!(kind = ?event.kind, id = %event.id, "ignoring non-insert change event");
        return;
    }

    let Some(task) = event.full_document else {
        // The feed contract guarantees a document on inserts
        error!(id = %event.id, "insert event without document, skipping");
        return;
    };

    match serde_json::to_value(&task) {
        Ok(data) => {
            let delivered = registry.broadcast(TASK_ADDED_EVENT, data).await;
            debug!(id = %task.id, delivered, "task insert fanned out");
        }
        Err(err) => error!(id = %task.id, %err, "failed to serialize task for broadcast"),
    }
}
