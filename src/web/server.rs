//! HTTP server implementation

use anyhow::Context;
use axum::{
    routing::{delete, get, put},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::handlers::{
    create_task, delete_task, get_task, list_tasks, root_handler, update_task, AppState,
};
use crate::tasks::TaskService;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/create-task", put(create_task))
        .route("/update-task", put(update_task))
        .route("/get-task/:task_id", get(get_task))
        .route("/list-tasks/:user_id", get(list_tasks))
        .route("/delete-task/:task_id", delete(delete_task))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create a fresh shared task service
pub fn new_state() -> AppState {
    Arc::new(Mutex::new(TaskService::new()))
}

/// Serve the router on an already bound listener
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    info!("Task API available at http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Bind the address and run the web server
pub async fn run_web_server(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    serve(listener, state).await
}
