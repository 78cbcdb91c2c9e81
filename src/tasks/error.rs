//! Task service errors

use crate::store::StoreError;

/// Errors returned by the [`TaskService`](super::TaskService)
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// No task with this id
    #[error("task not found: {0}")]
    NotFound(String),
    /// The task exists but belongs to another user
    #[error("task {task_id} does not belong to user {user_id}")]
    Forbidden { task_id: String, user_id: String },
    /// Underlying store rejected the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}
