//! Task record - the unit of user-tracked work

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store and never reused
    pub id: i32,
    /// Short name/title for the task
    pub name: String,
    /// Longer free-form description
    pub description: String,
    /// Completion flag - false for pending, true for done
    pub done: bool,
}

impl Task {
    /// Human-readable status label
    pub fn status_label(&self) -> &'static str {
        if self.done {
            "Done"
        } else {
            "Not Done"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({})",
            self.id,
            self.name,
            self.status_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label() {
        let mut task = Task {
            id: 1,
            name: "Buy milk".to_string(),
            description: "2% lowfat".to_string(),
            done: false,
        };
        assert_eq!(task.status_label(), "Not Done");

        task.done = true;
        assert_eq!(task.status_label(), "Done");
    }

    #[test]
    fn test_display() {
        let task = Task {
            id: 3,
            name: "Water plants".to_string(),
            description: String::new(),
            done: false,
        };
        assert_eq!(task.to_string(), "[3] Water plants (Not Done)");
    }
}
