//! Task entity type and derived display ordering

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::High => write!(f, "high"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::Low => write!(f, "low"),
        }
    }
}

/// A to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (creation timestamp)
    #[serde(default, deserialize_with = "crate::json::lenient")]
    pub id: EntityId,

    /// Task description
    #[serde(default)]
    pub text: String,

    /// Priority level; unknown tags fall back to medium
    #[serde(default, deserialize_with = "crate::json::lenient")]
    pub priority: TaskPriority,

    /// Completion flag, toggled in place
    #[serde(default, deserialize_with = "crate::json::lenient")]
    pub completed: bool,
}

impl Task {
    pub fn new(text: impl Into<String>, priority: TaskPriority) -> Self {
        Self {
            id: EntityId::now(),
            text: text.into(),
            priority,
            completed: false,
        }
    }
}

/// Derived display order: incomplete tasks first, stable within each group
///
/// This is a display-time sort only; the persisted order is insertion order.
pub fn display_order(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|t| t.completed);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(text: &str, completed: bool) -> Task {
        let mut t = Task::new(text, TaskPriority::Medium);
        t.completed = completed;
        t
    }

    #[test]
    fn test_display_order_incomplete_first() {
        let tasks = vec![task("a", true), task("b", false), task("c", false)];
        let ordered: Vec<&str> = display_order(&tasks).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(ordered, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_display_order_is_stable_within_groups() {
        let tasks = vec![
            task("d1", true),
            task("p1", false),
            task("d2", true),
            task("p2", false),
        ];
        let ordered: Vec<&str> = display_order(&tasks).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(ordered, vec!["p1", "p2", "d1", "d2"]);
    }

    #[test]
    fn test_display_order_does_not_mutate() {
        let tasks = vec![task("a", true), task("b", false)];
        let _ = display_order(&tasks);
        assert_eq!(tasks[0].text, "a");
    }

    #[test]
    fn test_unknown_priority_falls_back_to_medium() {
        let t: Task = serde_json::from_str(r#"{"id": 1, "text": "x", "priority": "urgent"}"#)
            .unwrap();
        assert_eq!(t.priority, TaskPriority::Medium);
    }

    #[test]
    fn test_task_wire_shape() {
        let t = Task::new("write abstract", TaskPriority::High);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["completed"], false);
    }
}
