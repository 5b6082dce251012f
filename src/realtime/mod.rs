//! Realtime Module
//!
//! The live-update path: a registry of connected clients, the background
//! fanout task that bridges the store's change feed to them, and the
//! WebSocket endpoint clients connect through.
//!
//! Delivery is best-effort, at-most-once per client. Clients receive insert
//! notifications observed while they are connected; there is no replay.

mod fanout;
mod registry;
mod ws;

pub use fanout::{spawn_fanout_task, TASK_ADDED_EVENT};
pub use registry::{ClientId, ClientRegistry, PushMessage};
pub use ws::ws_handler;
