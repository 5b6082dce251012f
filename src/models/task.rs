//! Task Document Module
//!
//! Defines the task document as it lives in the store, plus the write
//! shapes used to create and patch one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Task Document ==
/// A task as persisted in the task collection.
///
/// The id and timestamp are assigned by the store at insertion time; the
/// remaining fields come from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Document id, assigned on insert
    pub id: Uuid,
    /// Short task title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Grouping category (e.g. "todo", "in-progress")
    pub category: String,
    /// Email of the owning user
    pub email: String,
    /// Creation time, assigned on insert
    pub timestamp: DateTime<Utc>,
}

// == New Task ==
/// Fields supplied by the caller when creating a task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: String,
    pub email: String,
}

// == Task Patch ==
/// Partial-field replacement for an existing task.
///
/// `None` fields are left untouched, matching `$set`-style update semantics.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub email: Option<String>,
}

impl TaskPatch {
    /// Applies the patch to a task in place.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(email) = &self.email {
            task.email = email.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: Uuid::new_v4(),
            title: "Write report".to_string(),
            description: "Quarterly numbers".to_string(),
            category: "todo".to_string(),
            email: "ana@example.com".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut task = sample_task();
        let patch = TaskPatch {
            category: Some("done".to_string()),
            ..Default::default()
        };

        patch.apply(&mut task);

        assert_eq!(task.category, "done");
        assert_eq!(task.title, "Write report");
        assert_eq!(task.email, "ana@example.com");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut task = sample_task();
        let before = task.clone();

        TaskPatch::default().apply(&mut task);

        assert_eq!(task, before);
    }

    #[test]
    fn test_task_serializes_with_timestamp() {
        let task = sample_task();
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["title"], "Write report");
        assert!(json["timestamp"].is_string());
        assert!(json["id"].is_string());
    }
}
