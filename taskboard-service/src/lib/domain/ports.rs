use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::domain::project::models::CreateProject;
use crate::domain::project::models::Project;
use crate::domain::task::models::CreateTask;
use crate::domain::task::models::Task;
use crate::domain::user::models::CreateUser;
use crate::domain::user::models::User;

/// Persistence port for every aggregate the service owns.
///
/// Lookups take the id as a string because that is how ids arrive from the
/// outside world (path segments, token subjects). An id that is not a valid
/// integer is indistinguishable from an unknown one: both come back as
/// `Ok(None)`, never as an error. Errors are reserved for the storage layer
/// itself failing.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Persist a new user. The password field must already be hashed.
    ///
    /// # Returns
    /// Created user entity with its assigned id
    ///
    /// # Errors
    /// * `Duplicate` - the email is already registered
    /// * `Database` - the operation failed
    async fn create_user(&self, user: CreateUser) -> Result<User, StoreError>;

    /// Retrieve a user by id.
    ///
    /// # Returns
    /// Optional user entity (None if not found or id is not an integer)
    ///
    /// # Errors
    /// * `Database` - the operation failed
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new task. Every new task starts in `TODO` status.
    ///
    /// # Returns
    /// Created task entity with its assigned id and status
    ///
    /// # Errors
    /// * `Database` - the operation failed
    async fn create_task(&self, task: CreateTask) -> Result<Task, StoreError>;

    /// Retrieve a task by id.
    ///
    /// # Returns
    /// Optional task entity (None if not found or id is not an integer)
    ///
    /// # Errors
    /// * `Database` - the operation failed
    async fn get_task(&self, id: &str) -> Result<Option<Task>, StoreError>;

    /// Persist a new project.
    ///
    /// # Returns
    /// Created project entity with its assigned id
    ///
    /// # Errors
    /// * `Database` - the operation failed
    async fn create_project(&self, project: CreateProject) -> Result<Project, StoreError>;

    /// Retrieve a project by id.
    ///
    /// # Returns
    /// Optional project entity (None if not found or id is not an integer)
    ///
    /// # Errors
    /// * `Database` - the operation failed
    async fn get_project(&self, id: &str) -> Result<Option<Project>, StoreError>;

    /// Delete a project by id.
    ///
    /// # Returns
    /// Number of rows removed (0 when the id is unknown or not an integer)
    ///
    /// # Errors
    /// * `Database` - the operation failed
    async fn delete_project(&self, id: &str) -> Result<u64, StoreError>;
}
