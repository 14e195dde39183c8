pub mod create_project;
pub mod delete_project;
pub mod get_project;

pub use create_project::create_project;
pub use delete_project::delete_project;
pub use get_project::get_project;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::project::models::Project;

/// Project payload serialized into responses, shared by the create and
/// get handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectResponseData {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Project> for ProjectResponseData {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            created_at: project.created_at,
        }
    }
}
