//! API Routes
//!
//! Configures the Axum router with all task server endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_task_handler, create_user_handler, delete_task_handler, list_users_handler,
    root_handler, tasks_by_email_handler, update_task_handler, AppState,
};
use crate::realtime::ws_handler;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Liveness probe
/// - `POST /users` - Register a user
/// - `GET /users` - List all users
/// - `POST /tasks` - Create a task
/// - `GET /tasks/user/:email` - List tasks by owner email
/// - `PUT /tasks/:id` - Partially update a task
/// - `DELETE /tasks/:id` - Delete a task
/// - `GET /ws/tasks` - Realtime push channel (WebSocket)
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/", get(root_handler))
        .route("/users", post(create_user_handler).get(list_users_handler))
        .route("/tasks", post(create_task_handler))
        .route("/tasks/user/:email", get(tasks_by_email_handler))
        .route(
            "/tasks/:id",
            put(update_task_handler).delete(delete_task_handler),
        )
        .route("/ws/tasks", get(ws_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
