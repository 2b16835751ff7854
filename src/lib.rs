//! TaskDeck - interactive command-line task tracker
//!
//! Keeps an insertion-ordered list of tasks with unique, never-reused
//! ids and persists the list plus the id counter between runs as two
//! files in a data directory.

pub mod app;
pub mod core;
pub mod storage;
pub mod ui;

// Re-exports
pub use app::App;
pub use crate::core::{MarkDone, StoreError, Task, TaskStore};
pub use storage::Storage;

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
