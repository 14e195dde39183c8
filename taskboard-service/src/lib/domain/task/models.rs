use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Task aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub status: TaskStatus,
    pub project_id: i64,
    pub assigned_to: i64,
    pub created_at: DateTime<Utc>,
}

/// Workflow state of a task. Every new task starts in `Todo`; callers cannot
/// choose a status at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    InTesting,
    Done,
}

impl TaskStatus {
    /// Storage representation, identical to the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::InTesting => "IN_TESTING",
            TaskStatus::Done => "DONE",
        }
    }
}

/// Payload for persisting a new task. Status is absent on purpose: the store
/// assigns `TODO`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub name: String,
    pub project_id: i64,
    pub assigned_to: i64,
}
