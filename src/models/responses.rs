//! Response DTOs for the task server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use uuid::Uuid;

use crate::models::Task;

/// Response body for successful inserts (POST /users, POST /tasks)
///
/// Mirrors the shape a document store's insert result carries on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    /// Whether the write was acknowledged by the store
    pub acknowledged: bool,
    /// Id of the inserted document
    pub inserted_id: Uuid,
}

impl InsertResponse {
    /// Creates a new InsertResponse for an acknowledged insert
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Response body for a duplicate user registration (POST /users)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateUserResponse {
    /// Explanation message
    pub message: String,
    /// Always null, no document was inserted
    pub inserted_id: Option<Uuid>,
}

impl DuplicateUserResponse {
    /// Creates the canonical "already exists" response
    pub fn new() -> Self {
        Self {
            message: "User already exists".to_string(),
            inserted_id: None,
        }
    }
}

impl Default for DuplicateUserResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body carrying only a human-readable message
///
/// Used by update and delete confirmations.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Outcome message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for task listing (GET /tasks/user/:email)
#[derive(Debug, Clone, Serialize)]
pub struct TasksResponse {
    /// Tasks owned by the requested email
    pub tasks: Vec<Task>,
}

impl TasksResponse {
    /// Creates a new TasksResponse
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
