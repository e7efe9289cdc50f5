use std::fmt;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single task tracked by the todo server. IDs are assigned by the
/// server and never reused within a run.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub description: String,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Completed,
}

impl TodoItem {
    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indicator = if self.is_completed() { "x" } else { " " };
        write!(f, "[{}] {}", indicator, self.description)
    }
}

/// Which items a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Value for the `status` query parameter, `None` for unfiltered
    /// listings.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some("pending"),
            StatusFilter::Completed => Some("completed"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            _ => Err(anyhow!(
                "unknown status filter: {} (expected 'all', 'pending' or 'completed')",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: TodoStatus) -> TodoItem {
        TodoItem {
            id: 1,
            description: "buy milk".to_string(),
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn display_marks_completed_items() {
        assert_eq!(item(TodoStatus::Completed).to_string(), "[x] buy milk");
        assert_eq!(item(TodoStatus::Pending).to_string(), "[ ] buy milk");
    }

    #[test]
    fn deserializes_server_payload() {
        let json = r#"{
            "id": 3,
            "description": "water the plants",
            "status": "pending",
            "created_at": "2026-08-04T09:30:00Z"
        }"#;

        let item: TodoItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, 3);
        assert_eq!(item.description, "water the plants");
        assert_eq!(item.status, TodoStatus::Pending);
        assert!(!item.is_completed());
    }

    #[test]
    fn status_filter_parses_known_values() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "pending".parse::<StatusFilter>().unwrap(),
            StatusFilter::Pending
        );
        assert_eq!(
            "Completed".parse::<StatusFilter>().unwrap(),
            StatusFilter::Completed
        );
    }

    #[test]
    fn status_filter_rejects_unknown_values() {
        assert!("done".parse::<StatusFilter>().is_err());
        assert!("".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn status_filter_query_values() {
        assert_eq!(StatusFilter::All.as_query(), None);
        assert_eq!(StatusFilter::Pending.as_query(), Some("pending"));
        assert_eq!(StatusFilter::Completed.as_query(), Some("completed"));
    }
}
