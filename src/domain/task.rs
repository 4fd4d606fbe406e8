//! Task record

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned from 1 upward
    pub id: u64,

    /// Short human-readable title, never blank
    pub title: String,

    /// Completion flag
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-done task
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    pub fn status_label(&self) -> &'static str {
        if self.done { "DONE" } else { "NOT DONE" }
    }
}

/// Renders as `[id] title - DONE|NOT DONE`
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - {}", self.id, self.title, self.status_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_not_done() {
        let task = Task::new(1, "Buy milk");
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut task = Task::new(1, "Buy milk");
        task.toggle();
        assert!(task.done);
        task.toggle();
        assert!(!task.done);
    }

    #[test]
    fn test_display() {
        let mut task = Task::new(1, "Buy milk");
        assert_eq!(task.to_string(), "[1] Buy milk - NOT DONE");
        task.toggle();
        assert_eq!(task.to_string(), "[1] Buy milk - DONE");
    }

    #[test]
    fn test_json_shape() {
        let task = Task::new(2, "Write docs");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json, serde_json::json!({"id": 2, "title": "Write docs", "done": false}));
    }

    #[test]
    fn test_deserialize_ignores_extra_keys() {
        let task: Task =
            serde_json::from_str(r#"{"id": 3, "title": "Call mom", "done": true, "priority": "high"}"#).unwrap();
        assert_eq!(task.id, 3);
        assert!(task.done);
    }

    #[test]
    fn test_deserialize_missing_done_defaults_false() {
        let task: Task = serde_json::from_str(r#"{"id": 4, "title": "Read"}"#).unwrap();
        assert!(!task.done);
    }
}
