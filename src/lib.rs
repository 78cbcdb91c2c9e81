//! recordstore - in-memory keyed record stores
//!
//! - `store`: the generic keyed record store with duplicate-key rejection
//! - `calc`: small arithmetic and classification helpers
//! - `tasks`: a TODO task service built on the store
//! - `web`: the task service over HTTP

pub mod calc;
pub mod config;
pub mod error;
pub mod store;
pub mod tasks;
pub mod web;

/// Re-export commonly used types
pub use error::{Error, Result};
pub use store::{Record, RecordStore, StoreError, UserDirectory};
pub use tasks::{NewTask, Task, TaskError, TaskService, TaskUpdate};
