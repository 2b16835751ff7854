//! Task store - owns the ordered task collection and the id counter

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Task;

/// First id handed out by a fresh store
pub const FIRST_TASK_ID: i32 = 1;

/// Domain error for store lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no task with id {id}")]
    NotFound { id: i32 },
}

/// Outcome of marking a task done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkDone {
    /// Task was pending and is now done
    Completed,
    /// Task was already done; state unchanged
    AlreadyDone,
}

/// In-memory task collection, insertion-ordered, with a monotonic id counter
///
/// Ids are unique for the lifetime of the store: `next_id` only ever
/// increases, so a removed task's id is never reissued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: i32,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: FIRST_TASK_ID,
        }
    }

    /// Rebuild a store from previously persisted state
    pub fn from_parts(tasks: Vec<Task>, next_id: i32) -> Self {
        Self { tasks, next_id }
    }

    /// Add a new task, assigning it the next id
    pub fn create(&mut self, name: String, description: String) -> &Task {
        let task = Task {
            id: self.next_id,
            name,
            description,
            done: false,
        };
        self.next_id += 1;
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Look up a task by id
    pub fn find_by_id(&self, id: i32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Mark a task done; idempotent
    pub fn mark_done(&mut self, id: i32) -> Result<MarkDone, StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;

        if task.done {
            Ok(MarkDone::AlreadyDone)
        } else {
            task.done = true;
            Ok(MarkDone::Completed)
        }
    }

    /// Remove a task, returning it; remaining order is preserved
    pub fn remove(&mut self, id: i32) -> Result<Task, StoreError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound { id })?;
        Ok(self.tasks.remove(pos))
    }

    /// All tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of stored tasks
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Id the next created task will receive
    pub fn next_id(&self) -> i32 {
        self.next_id
    }
}
