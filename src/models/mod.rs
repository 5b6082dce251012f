//! Request, response and document models for the task server API
//!
//! This module defines the persisted documents (tasks, users) and the DTOs
//! (Data Transfer Objects) used for serializing/deserializing HTTP request
//! and response bodies.

pub mod requests;
pub mod responses;
pub mod task;
pub mod user;

// Re-export commonly used types
pub use requests::{CreateTaskRequest, CreateUserRequest, UpdateTaskRequest};
pub use responses::{DuplicateUserResponse, InsertResponse, MessageResponse, TasksResponse};
pub use task::{NewTask, Task, TaskPatch};
pub use user::{NewUser, User};
