use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::errors::StoreError;
use crate::domain::ports::Store;
use crate::domain::project::models::CreateProject;
use crate::domain::project::models::Project;
use crate::domain::task::models::CreateTask;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskStatus;
use crate::domain::user::models::CreateUser;
use crate::domain::user::models::User;

/// Postgres-backed implementation of the [`Store`] port.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// String ids arrive straight from URL paths. Anything that is not an
    /// integer cannot match a row, so lookups treat it as absent rather
    /// than erroring.
    fn parse_id(id: &str) -> Option<i64> {
        id.parse::<i64>().ok()
    }

    fn row_to_user(row: &PgRow) -> User {
        User {
            id: row.get("id"),
            email: row.get("email"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            password: row.get("password"),
            created_at: row.get("created_at"),
        }
    }

    fn row_to_task(row: &PgRow) -> Result<Task, StoreError> {
        let status: String = row.get("status");

        Ok(Task {
            id: row.get("id"),
            name: row.get("name"),
            status: Self::parse_status(&status)?,
            project_id: row.get("project_id"),
            assigned_to: row.get("assigned_to"),
            created_at: row.get("created_at"),
        })
    }

    fn row_to_project(row: &PgRow) -> Project {
        Project {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get("created_at"),
        }
    }

    fn parse_status(status: &str) -> Result<TaskStatus, StoreError> {
        match status {
            "TODO" => Ok(TaskStatus::Todo),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "IN_TESTING" => Ok(TaskStatus::InTesting),
            "DONE" => Ok(TaskStatus::Done),
            other => Err(StoreError::Database(format!(
                "unknown task status: {other}"
            ))),
        }
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn create_user(&self, user: CreateUser) -> Result<User, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (email, first_name, last_name, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, first_name, last_name, password, created_at
            "#,
        )
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return StoreError::Duplicate("users_email_key".to_string());
                }
            }
            StoreError::Database(e.to_string())
        })?;

        Ok(Self::row_to_user(&row))
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let id = match Self::parse_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };

        let row = sqlx::query(
            r#"
            SELECT id, email, first_name, last_name, password, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(|r| Self::row_to_user(&r)))
    }

    async fn create_task(&self, task: CreateTask) -> Result<Task, StoreError> {
        // Status is not bound: the column default assigns TODO.
        let row = sqlx::query(
            r#"
            INSERT INTO tasks (name, project_id, assigned_to)
            VALUES ($1, $2, $3)
            RETURNING id, name, status, project_id, assigned_to, created_at
            "#,
        )
        .bind(&task.name)
        .bind(task.project_id)
        .bind(task.assigned_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Self::row_to_task(&row)
    }

    async fn get_task(&self, id: &str) -> Result<Option<Task>, StoreError> {
        let id = match Self::parse_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };

        let row = sqlx::query(
            r#"
            SELECT id, name, status, project_id, assigned_to, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_task(&r)?)),
            None => Ok(None),
        }
    }

    async fn create_project(&self, project: CreateProject) -> Result<Project, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO projects (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(&project.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self::row_to_project(&row))
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let id = match Self::parse_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };

        let row = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(|r| Self::row_to_project(&r)))
    }

    async fn delete_project(&self, id: &str) -> Result<u64, StoreError> {
        let id = match Self::parse_id(id) {
            Some(id) => id,
            None => return Ok(0),
        };

        let result = sqlx::query(
            r#"
            DELETE FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
