//! HTTP handlers for the task routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::tasks::{NewTask, Task, TaskError, TaskService, TaskUpdate};

/// Shared application state
pub type AppState = Arc<Mutex<TaskService>>;

/// Response for the root route
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Response for task creation
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub task: Task,
}

/// Response for task update
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTaskResponse {
    pub updated_task_id: String,
}

/// Response for task listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
}

/// Response for task deletion
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    pub deleted_task_id: String,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let status = match self {
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            TaskError::Forbidden { .. } => StatusCode::FORBIDDEN,
            TaskError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!("Request failed with {}: {}", status, self);

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// Root handler, answers so clients can check the service is up
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World from Todo API".to_string(),
    })
}

/// Create a task from the request body
pub async fn create_task(
    State(service): State<AppState>,
    Json(req): Json<NewTask>,
) -> Result<Json<CreateTaskResponse>, TaskError> {
    debug!("Creating task for user {}", req.user_id);

    let task = service.lock().await.create(req)?;
    Ok(Json(CreateTaskResponse { task }))
}

/// Update an existing task
pub async fn update_task(
    State(service): State<AppState>,
    Json(req): Json<TaskUpdate>,
) -> Result<Json<UpdateTaskResponse>, TaskError> {
    debug!("Updating task {}", req.task_id);

    let task = service.lock().await.update(req)?;
    Ok(Json(UpdateTaskResponse {
        updated_task_id: task.task_id,
    }))
}

/// Get a task by id
pub async fn get_task(
    State(service): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, TaskError> {
    debug!("Fetching task {}", task_id);

    let service = service.lock().await;
    match service.get(&task_id) {
        Some(task) => Ok(Json(task.clone())),
        None => Err(TaskError::NotFound(task_id)),
    }
}

/// List the tasks of a user
pub async fn list_tasks(
    State(service): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<ListTasksResponse> {
    debug!("Listing tasks of user {}", user_id);

    let tasks = service.lock().await.list(&user_id);
    Json(ListTasksResponse { tasks })
}

/// Delete handler; unknown ids still answer 200
pub async fn delete_task(
    State(service): State<AppState>,
    Path(task_id): Path<String>,
) -> Json<DeleteTaskResponse> {
    debug!("Deleting task {}", task_id);

    service.lock().await.delete(&task_id);
    Json(DeleteTaskResponse {
        deleted_task_id: task_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        Arc::new(Mutex::new(TaskService::with_seed(42)))
    }

    #[tokio::test]
    async fn test_get_missing_task_is_not_found() {
        let result = get_task(State(state()), Path("task_nope".to_string())).await;
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let state = state();
        let Json(created) = create_task(
            State(state.clone()),
            Json(NewTask {
                content: "hello".into(),
                user_id: "u1".into(),
                is_done: false,
            }),
        )
        .await
        .unwrap();

        let Json(listed) = list_tasks(State(state), Path("u1".to_string())).await;
        assert_eq!(listed.tasks, vec![created.task]);
    }

    #[test]
    fn test_error_statuses() {
        let forbidden = TaskError::Forbidden {
            task_id: "t".into(),
            user_id: "u".into(),
        };
        assert_eq!(forbidden.into_response().status(), StatusCode::FORBIDDEN);
    }
}
