//! API Module
//!
//! HTTP handlers and routing for the task server REST API.
//!
//! # Endpoints
//! - `GET /` - Liveness probe
//! - `POST /users` - Register a user
//! - `GET /users` - List all users
//! - `POST /tasks` - Create a task
//! - `GET /tasks/user/:email` - List tasks by owner email
//! - `PUT /tasks/:id` - Partially update a task
//! - `DELETE /tasks/:id` - Delete a task
//! - `GET /ws/tasks` - Realtime push channel (WebSocket)

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
