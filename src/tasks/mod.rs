//! TODO task module
//!
//! An in-memory task service built on the keyed record store, holding
//! tasks by id. The web module exposes it over HTTP.

mod error;
mod service;
mod task;

pub use error::TaskError;
pub use service::TaskService;
pub use task::{NewTask, Task, TaskUpdate};
