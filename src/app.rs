//! Application state - ties the task store to its storage

use std::path::Path;

use crate::core::TaskStore;
use crate::storage::Storage;
use crate::Result;

/// Application state for one run: the live store plus its gateway
pub struct App {
    pub store: TaskStore,
    storage: Storage,
}

impl App {
    /// Load persisted state from `data_dir` (empty on first run)
    pub fn startup(data_dir: &Path) -> Result<Self> {
        let storage = Storage::new(data_dir);
        let store = storage.load()?;
        Ok(Self { store, storage })
    }

    /// Persist the current store state
    pub fn shutdown(&self) -> Result<()> {
        self.storage.save(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_startup_shutdown_round_trip() {
        let dir = TempDir::new().unwrap();

        let mut app = App::startup(dir.path()).unwrap();
        app.store
            .create("persisted".to_string(), "across runs".to_string());
        app.shutdown().unwrap();

        let app = App::startup(dir.path()).unwrap();
        assert_eq!(app.store.count(), 1);
        assert_eq!(app.store.list()[0].name, "persisted");
        assert_eq!(app.store.next_id(), 2);
    }

    #[test]
    fn test_startup_on_fresh_dir() {
        let dir = TempDir::new().unwrap();

        let app = App::startup(dir.path()).unwrap();
        assert_eq!(app.store.count(), 0);
        assert_eq!(app.store.next_id(), 1);
    }
}
