//! API Handlers
//!
//! HTTP request handlers for each task server endpoint. Each handler issues
//! at most one or two store calls and maps the outcome to a status code and
//! JSON body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{
    CreateTaskRequest, CreateUserRequest, DuplicateUserResponse, InsertResponse, MessageResponse,
    TasksResponse, UpdateTaskRequest, User,
};
use crate::realtime::ClientRegistry;
use crate::store::{Store, UserInsert};

/// Application state shared across all handlers.
///
/// Owns the store and the realtime client registry, both constructed at
/// startup and injected here and into the fanout task.
#[derive(Clone)]
pub struct AppState {
    /// Document store with the user and task collections
    pub store: Arc<Store>,
    /// Registry of connected realtime clients
    pub registry: Arc<ClientRegistry>,
}

impl AppState {
    /// Creates a new AppState from already-built services.
    pub fn new(store: Arc<Store>, registry: Arc<ClientRegistry>) -> Self {
        Self { store, registry }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            Arc::new(Store::new()),
            Arc::new(ClientRegistry::new(config.client_buffer)),
        )
    }
}

/// Handler for GET /
///
/// Liveness probe.
pub async fn root_handler() -> &'static str {
    "Server is Running"
}

/// Handler for POST /users
///
/// Registers a user unless the email is already present; a duplicate is
/// answered with a message, not an error status.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let response = match state.store.users().insert(req.into()).await {
        UserInsert::DuplicateEmail => Json(DuplicateUserResponse::new()).into_response(),
        UserInsert::Inserted(id) => Json(InsertResponse::new(id)).into_response(),
    };
    Ok(response)
}

/// Handler for GET /users
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.users().find_all().await)
}

/// Handler for POST /tasks
///
/// Validates the title, inserts with a server-assigned timestamp and returns
/// 201. The resulting change event drives the realtime fanout; nothing is
/// published from here.
pub async fn create_task_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<InsertResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let task = state.store.tasks().insert(req.into_new_task()).await;

    Ok((StatusCode::CREATED, Json(InsertResponse::new(task.id))))
}

/// Handler for GET /tasks/user/:email
pub async fn tasks_by_email_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<TasksResponse>> {
    if email.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Email is required".to_string()));
    }

    let tasks = state.store.tasks().find_by_email(&email).await;
    Ok(Json(TasksResponse::new(tasks)))
}

/// Handler for PUT /tasks/:id
///
/// Partial-field update by id.
pub async fn update_task_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<MessageResponse>> {
    let id = parse_task_id(&id)?;

    if state.store.tasks().update(id, req.into()).await {
        Ok(Json(MessageResponse::new("Task updated successfully")))
    } else {
        Err(ApiError::NotFound("Task not found".to_string()))
    }
}

/// Handler for DELETE /tasks/:id
pub async fn delete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_task_id(&id)?;

    if state.store.tasks().delete(id).await {
        Ok(Json(MessageResponse::new("Task deleted successfully")))
    } else {
        Err(ApiError::NotFound("Task not found".to_string()))
    }
}

/// Parses a path id, mapping malformed input to a 400.
fn parse_task_id(raw: &str) -> Result<Uuid> {
    raw.parse()
        .map_err(|_| ApiError::InvalidRequest("Invalid task id".to_string()))
}
