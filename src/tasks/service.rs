//! In-memory task service

use super::error::TaskError;
use super::task::{NewTask, Task, TaskUpdate};
use crate::store::RecordStore;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use xxhash_rust::xxh64::xxh64;

/// A task plus its creation order within the service
#[derive(Debug, Clone)]
struct StoredTask {
    seq: u64,
    task: Task,
}

/// Task service
///
/// Holds every task in a record store keyed by task id. Not synchronized:
/// the web layer shares it behind a mutex.
pub struct TaskService {
    tasks: RecordStore<String, StoredTask>,

    /// Next sequence number, used for ids and ordering
    next_seq: u64,

    /// Seed mixed into generated ids
    seed: u64,
}

impl TaskService {
    /// Create an empty service with a time-based id seed
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    /// Create an empty service with a fixed id seed
    pub fn with_seed(seed: u64) -> Self {
        TaskService {
            tasks: RecordStore::new(),
            next_seq: 0,
            seed,
        }
    }

    /// Create a task and return it with its assigned id
    pub fn create(&mut self, new_task: NewTask) -> Result<Task, TaskError> {
        let (seq, task_id) = loop {
            let seq = self.next_seq;
            self.next_seq += 1;

            let task_id = self.task_id(seq, &new_task.user_id);
            if !self.tasks.contains(&task_id) {
                break (seq, task_id);
            }
        };

        let task = Task {
            task_id: task_id.clone(),
            user_id: new_task.user_id,
            content: new_task.content,
            is_done: new_task.is_done,
            created_time: unix_now(),
        };

        self.tasks.insert(task_id, StoredTask { seq, task: task.clone() })?;
        debug!("Created task {} for user {}", task.task_id, task.user_id);

        Ok(task)
    }

    /// Get a task by id
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.lookup(task_id).map(|stored| &stored.task)
    }

    /// Replace the content and completion flag of a task
    pub fn update(&mut self, update: TaskUpdate) -> Result<Task, TaskError> {
        let stored = self
            .tasks
            .lookup_mut(update.task_id.as_str())
            .ok_or_else(|| TaskError::NotFound(update.task_id.clone()))?;

        if stored.task.user_id != update.user_id {
            return Err(TaskError::Forbidden {
                task_id: update.task_id,
                user_id: update.user_id,
            });
        }

        stored.task.content = update.content;
        stored.task.is_done = update.is_done;
        debug!("Updated task {}", stored.task.task_id);

        Ok(stored.task.clone())
    }

    /// List the tasks of a user in creation order
    pub fn list(&self, user_id: &str) -> Vec<Task> {
        let mut owned: Vec<&StoredTask> = self
            .tasks
            .values()
            .filter(|stored| stored.task.user_id == user_id)
            .collect();
        owned.sort_by_key(|stored| stored.seq);

        owned.into_iter().map(|stored| stored.task.clone()).collect()
    }

    /// Delete a task; deleting an unknown id does nothing
    pub fn delete(&mut self, task_id: &str) -> Option<Task> {
        let removed = self.tasks.delete(task_id).map(|stored| stored.task);
        if removed.is_some() {
            debug!("Deleted task {}", task_id);
        }
        removed
    }

    /// Number of tasks held
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the service holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn task_id(&self, seq: u64, user_id: &str) -> String {
        let mut input = Vec::with_capacity(8 + user_id.len());
        input.extend_from_slice(&seq.to_le_bytes());
        input.extend_from_slice(user_id.as_bytes());
        format!("task_{:016x}", xxh64(&input, self.seed))
    }
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
