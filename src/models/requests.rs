//! Request DTOs for the task server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::{NewTask, NewUser, TaskPatch};
use crate::store::MAX_TITLE_LENGTH;

/// Request body for task creation (POST /tasks)
///
/// # Fields
/// - `title`: required, at most 50 characters
/// - `description`, `category`, `email`: optional, default to empty
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    /// The task title
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Grouping category
    #[serde(default)]
    pub category: String,
    /// Owner email
    #[serde(default)]
    pub email: String,
}

impl CreateTaskRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match &self.title {
            None => Some("Invalid task title".to_string()),
            Some(title) if title.is_empty() || title.chars().count() > MAX_TITLE_LENGTH => {
                Some("Invalid task title".to_string())
            }
            Some(_) => None,
        }
    }

    /// Converts the validated request into a store write.
    ///
    /// Callers must run `validate` first; a missing title becomes empty here.
    pub fn into_new_task(self) -> NewTask {
        NewTask {
            title: self.title.unwrap_or_default(),
            description: self.description,
            category: self.category,
            email: self.email,
        }
    }
}

/// Request body for partial task updates (PUT /tasks/:id)
///
/// Absent fields are left unchanged on the stored document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(req: UpdateTaskRequest) -> Self {
        TaskPatch {
            title: req.title,
            description: req.description,
            category: req.category,
            email: req.email,
        }
    }
}

/// Request body for user registration (POST /users)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// The user's email, unique across users
    pub email: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateUserRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        if self.email.trim().is_empty() {
            return Some("Email is required".to_string());
        }
        None
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            email: req.email,
            name: req.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_request_deserialize() {
        let json = r#"{"title": "Buy milk", "category": "errands", "email": "ana@example.com"}"#;
        let req: CreateTaskRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title.as_deref(), Some("Buy milk"));
        assert_eq!(req.category, "errands");
        assert_eq!(req.description, "");
    }

    #[test]
    fn test_validate_missing_title() {
        let json = r#"{"email": "ana@example.com"}"#;
        let req: CreateTaskRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_title_too_long() {
        let req = CreateTaskRequest {
            title: Some("x".repeat(MAX_TITLE_LENGTH + 1)),
            description: String::new(),
            category: String::new(),
            email: String::new(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_title_at_limit() {
        let req = CreateTaskRequest {
            title: Some("x".repeat(MAX_TITLE_LENGTH)),
            description: String::new(),
            category: String::new(),
            email: String::new(),
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_update_request_partial_fields() {
        let json = r#"{"category": "done"}"#;
        let req: UpdateTaskRequest = serde_json::from_str(json).unwrap();
        let patch: TaskPatch = req.into();
        assert_eq!(patch.category.as_deref(), Some("done"));
        assert!(patch.title.is_none());
    }

    #[test]
    fn test_create_user_request_validate_empty_email() {
        let req = CreateUserRequest {
            email: "  ".to_string(),
            name: None,
        };
        assert!(req.validate().is_some());
    }
}
