//! Web interface module
//!
//! Exposes the task service over HTTP with JSON bodies.

mod handlers;
mod server;

pub use handlers::{
    AppState, CreateTaskResponse, DeleteTaskResponse, ErrorResponse, ListTasksResponse,
    RootResponse, UpdateTaskResponse,
};
pub use server::{new_state, router, run_web_server, serve};
