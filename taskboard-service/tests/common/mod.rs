use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::JwtHandler;
use chrono::Utc;
use taskboard_service::domain::errors::StoreError;
use taskboard_service::domain::ports::Store;
use taskboard_service::domain::project::models::CreateProject;
use taskboard_service::domain::project::models::Project;
use taskboard_service::domain::task::models::CreateTask;
use taskboard_service::domain::task::models::Task;
use taskboard_service::domain::task::models::TaskStatus;
use taskboard_service::domain::user::models::CreateUser;
use taskboard_service::domain::user::models::User;
use taskboard_service::inbound::http::router::create_router;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory store.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(MemoryStore::default());
        let jwt_handler = Arc::new(JwtHandler::new(TEST_JWT_SECRET));

        let router = create_router(store, jwt_handler);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with a token. The Authorization header
    /// carries the raw token, no scheme prefix.
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).header("Authorization", token)
    }

    /// Helper to make POST request with a token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).header("Authorization", token)
    }

    /// Helper to make DELETE request with a token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .header("Authorization", token)
    }

    /// Register a user and return the issued token.
    pub async fn register_user(&self, email: &str) -> String {
        let response = self
            .post("/api/v1/users/register")
            .json(&serde_json::json!({
                "email": email,
                "first_name": "bob",
                "last_name": "cj",
                "password": "5Vi64w^&",
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("registration response missing token")
            .to_string()
    }

    /// Create a project and return its id.
    pub async fn create_project(&self, token: &str, name: &str) -> i64 {
        let response = self
            .post_authenticated("/api/v1/projects", token)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("project response missing id")
    }
}

/// In-memory [`Store`] used by the API tests. Behaves like the Postgres
/// store for the parts the handlers observe: sequential ids from 1, a
/// unique constraint on email, TODO as the initial task status, and
/// `Ok(None)` for ids that do not parse as integers.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<i64, User>>,
    tasks: RwLock<HashMap<i64, Task>>,
    projects: RwLock<HashMap<i64, Project>>,
    user_ids: AtomicI64,
    task_ids: AtomicI64,
    project_ids: AtomicI64,
}

fn parse_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok()
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, user: CreateUser) -> Result<User, StoreError> {
        let mut users = self.users.write().unwrap();
        if users.values().any(|existing| existing.email == user.email) {
            return Err(StoreError::Duplicate("users_email_key".to_string()));
        }

        let id = self.user_ids.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            password: user.password,
            created_at: Utc::now(),
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let id = match parse_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };
        Ok(self.users.read().unwrap().get(&id).cloned())
    }

    async fn create_task(&self, task: CreateTask) -> Result<Task, StoreError> {
        let id = self.task_ids.fetch_add(1, Ordering::SeqCst) + 1;
        let task = Task {
            id,
            name: task.name,
            status: TaskStatus::Todo,
            project_id: task.project_id,
            assigned_to: task.assigned_to,
            created_at: Utc::now(),
        };
        self.tasks.write().unwrap().insert(id, task.clone());
        Ok(task)
    }

    async fn get_task(&self, id: &str) -> Result<Option<Task>, StoreError> {
        let id = match parse_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };
        Ok(self.tasks.read().unwrap().get(&id).cloned())
    }

    async fn create_project(&self, project: CreateProject) -> Result<Project, StoreError> {
        let id = self.project_ids.fetch_add(1, Ordering::SeqCst) + 1;
        let project = Project {
            id,
            name: project.name,
            created_at: Utc::now(),
        };
        self.projects.write().unwrap().insert(id, project.clone());
        Ok(project)
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let id = match parse_id(id) {
            Some(id) => id,
            None => return Ok(None),
        };
        Ok(self.projects.read().unwrap().get(&id).cloned())
    }

    async fn delete_project(&self, id: &str) -> Result<u64, StoreError> {
        let id = match parse_id(id) {
            Some(id) => id,
            None => return Ok(0),
        };
        match self.projects.write().unwrap().remove(&id) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }
}
