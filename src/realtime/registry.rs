//! Client Registry Module
//!
//! Tracks currently connected realtime clients and fans messages out to
//! them. Each client owns a bounded outbound queue; a client that cannot
//! keep up loses messages of its own without stalling anyone else.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde_json::Value;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, warn};

// == Push Message ==
/// One outbound message to a realtime client, serialized to a JSON text
/// frame as `{"event": ..., "data": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    /// Event name, e.g. "taskAdded"
    pub event: String,
    /// Event payload
    pub data: Value,
}

/// Identifies one connected client for the lifetime of its connection.
pub type ClientId = u64;

// == Client Registry ==
/// Membership set of connected clients.
///
/// `register`/`unregister` bound a client's connected lifetime; `broadcast`
/// snapshots the membership before sending, so clients joining or leaving
/// mid-broadcast never corrupt delivery to the rest.
#[derive(Debug)]
pub struct ClientRegistry {
    clients: RwLock<HashMap<ClientId, mpsc::Sender<PushMessage>>>,
    next_id: AtomicU64,
    /// Outbound queue capacity per client
    buffer: usize,
    /// Messages dropped because a client's queue was full
    dropped: AtomicU64,
}

impl ClientRegistry {
    // == Constructor ==
    /// Creates an empty registry.
    ///
    /// # Arguments
    /// * `buffer` - Outbound queue capacity per client; a full queue drops
    ///   further messages for that client only
    pub fn new(buffer: usize) -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            buffer: buffer.max(1),
            dropped: AtomicU64::new(0),
        }
    }

    // == Register ==
    /// Adds a client and returns its id plus the receiving half of its
    /// outbound queue. There is no cap on membership.
    pub async fn register(&self) -> (ClientId, mpsc::Receiver<PushMessage>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::channel(self.buffer);

        let mut clients = self.clients.write().await;
        clients.insert(id, tx);
        debug!(client = id, connected = clients.len(), "client registered");

        (id, rx)
    }

    // == Unregister ==
    /// Removes a client. Safe to call for an id that is not present.
    pub async fn unregister(&self, id: ClientId) {
        let mut clients = self.clients.write().await;
        if clients.remove(&id).is_some() {
            debug!(client = id, connected = clients.len(), "client unregistered");
        }
    }

    // == Broadcast ==
    /// Sends one message to every currently registered client.
    ///
    /// Delivery is fire-and-forget per client: a full queue drops the
    /// message for that client and counts it, a closed queue marks the
    /// client for removal. Returns the number of clients the message was
    /// queued for.
    pub async fn broadcast(&self, event: &str, data: Value) -> usize {
        // Snapshot membership, then send without holding the lock
        let snapshot: Vec<(ClientId, mpsc::Sender<PushMessage>)> = {
            let clients = self.clients.read().await;
            clients.iter().map(|(id, tx)| (*id, tx.clone())).collect()
        };

        let mut delivered = 0;
        let mut stale = Vec::new();

        for (id, tx) in snapshot {
            let message = PushMessage {
                event: event.to_string(),
                data: data.clone(),
            };
            match tx.try_send(message) {
                Ok(()) => delivered += 1,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    self.dropped.fetch_add(1, Ordering::Relaxed);
                    warn!(client = id, event, "client queue full, message dropped");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => stale.push(id),
            }
        }

        if !stale.is_empty() {
            let mut clients = self.clients.write().await;
            for id in stale {
                clients.remove(&id);
            }
        }

        delivered
    }

    // == Length ==
    /// Returns the number of currently registered clients.
    pub async fn len(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Returns true if no clients are registered.
    pub async fn is_empty(&self) -> bool {
        self.clients.read().await.is_empty()
    }

    // == Dropped ==
    /// Total messages dropped so far because a client queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_register_and_unregister() {
        let registry = ClientRegistry::new(8);

        let (id, _rx) = registry.register().await;
        assert_eq!(registry.len().await, 1);

        registry.unregister(id).await;
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_unregister_absent_client_is_safe() {
        let registry = ClientRegistry::new(8);
        registry.unregister(42).await;
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_broadcast_reaches_all_clients() {
        let registry = ClientRegistry::new(8);
        let (_a, mut rx_a) = registry.register().await;
        let (_b, mut rx_b) = registry.register().await;

        let delivered = registry.broadcast("taskAdded", json!({"title": "t"})).await;
        assert_eq!(delivered, 2);

        let msg_a = rx_a.recv().await.unwrap();
        let msg_b = rx_b.recv().await.unwrap();
        assert_eq!(msg_a.event, "taskAdded");
        assert_eq!(msg_a.data, msg_b.data);
    }

    #[tokio::test]
    async fn test_broadcast_with_no_clients() {
        let registry = ClientRegistry::new(8);
        let delivered = registry.broadcast("taskAdded", json!({})).await;
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn test_unregister_during_broadcast_spares_remaining_clients() {
        let registry = ClientRegistry::new(8);
        let (_a, mut rx_a) = registry.register().await;
        let (b, mut rx_b) = registry.register().await;
        let (_c, mut rx_c) = registry.register().await;

        // B disconnects while a broadcast is on its way
        registry.unregister(b).await;
        let delivered = registry.broadcast("taskAdded", json!({"n": 1})).await;

        assert_eq!(delivered, 2);
        assert!(rx_a.recv().await.is_some());
        assert!(rx_c.recv().await.is_some());
        // B's queue ended without a message
        assert!(rx_b.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_full_queue_drops_for_that_client_only() {
        let registry = ClientRegistry::new(1);
        let (_slow, mut rx_slow) = registry.register().await;
        let (_fast, mut rx_fast) = registry.register().await;

        registry.broadcast("taskAdded", json!({"n": 1})).await;
        // Fast client drains, slow one does not
        assert_eq!(rx_fast.recv().await.unwrap().data, json!({"n": 1}));

        registry.broadcast("taskAdded", json!({"n": 2})).await;

        assert_eq!(rx_fast.recv().await.unwrap().data, json!({"n": 2}));
        // Slow client kept only the first message
        assert_eq!(rx_slow.recv().await.unwrap().data, json!({"n": 1}));
        assert!(rx_slow.try_recv().is_err());
        assert_eq!(registry.dropped(), 1);
    }

    #[tokio::test]
    async fn test_closed_receiver_is_pruned_on_broadcast() {
        let registry = ClientRegistry::new(8);
        let (_gone, rx_gone) = registry.register().await;
        let (_live, mut rx_live) = registry.register().await;
        drop(rx_gone);

        let delivered = registry.broadcast("taskAdded", json!({})).await;

        assert_eq!(delivered, 1);
        assert_eq!(registry.len().await, 1);
        assert!(rx_live.recv().await.is_some());
    }
}
