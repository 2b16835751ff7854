//! Core domain - task records and the in-memory store

mod store;
mod task;

pub use store::{MarkDone, StoreError, TaskStore, FIRST_TASK_ID};
pub use task::Task;
