//! Tasktide - a task tracking backend
//!
//! User registration and task CRUD over HTTP, with a realtime push channel
//! that notifies connected clients whenever a task is inserted.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod realtime;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use realtime::{spawn_fanout_task, ClientRegistry};
pub use store::Store;
