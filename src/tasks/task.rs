//! Task types exchanged with clients

use serde::{Deserialize, Serialize};

/// A TODO task owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Service-assigned identifier
    pub task_id: String,
    /// Owner of the task
    pub user_id: String,
    /// Free-form task text
    pub content: String,
    /// Completion flag
    pub is_done: bool,
    /// Unix timestamp (seconds) of creation
    pub created_time: u64,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Task text
    pub content: String,
    /// Owner of the new task
    pub user_id: String,
    /// Completion flag, false when omitted
    #[serde(default)]
    pub is_done: bool,
}

/// Body of an update request
///
/// Replaces the content and completion flag of an existing task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// Must match the owner of the task
    pub user_id: String,
    /// Task to update
    pub task_id: String,
    /// Replacement text
    pub content: String,
    /// Replacement completion flag
    pub is_done: bool,
}
