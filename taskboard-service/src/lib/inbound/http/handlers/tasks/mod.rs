pub mod create_task;
pub mod get_task;

pub use create_task::create_task;
pub use get_task::get_task;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::task::models::Task;
use crate::domain::task::models::TaskStatus;

/// Task payload serialized into responses, shared by the create and get
/// handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponseData {
    pub id: i64,
    pub name: String,
    pub status: TaskStatus,
    pub project_id: i64,
    pub assigned_to: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponseData {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            status: task.status,
            project_id: task.project_id,
            assigned_to: task.assigned_to,
            created_at: task.created_at,
        }
    }
}
