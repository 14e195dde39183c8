use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::domain::project::errors::ProjectError;
use crate::domain::task::errors::TaskError;
use crate::domain::user::errors::UserError;

pub mod projects;
pub mod tasks;
pub mod users;

/// Liveness probe. Registered at the server root, outside the `/api/v1`
/// prefix, so it stays reachable without a token.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "message": "server is up and running..." }))
}

/// A successful HTTP response: a status code plus the serialized payload.
/// Payloads go out as-is, with no envelope around them.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// The error surface of the HTTP API. Every failure serializes to a flat
/// `{"error": message}` body with the matching status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists => ApiError::Conflict(err.to_string()),
            UserError::Storage(cause) => storage_error("user", &cause),
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound => ApiError::NotFound(err.to_string()),
            TaskError::Storage(cause) => storage_error("task", &cause),
        }
    }
}

impl From<ProjectError> for ApiError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound => ApiError::NotFound(err.to_string()),
            ProjectError::Storage(cause) => storage_error("project", &cause),
        }
    }
}

/// Storage failures reach the client as a fixed string. The cause goes to
/// the log, never into the response body.
fn storage_error(aggregate: &str, cause: &str) -> ApiError {
    tracing::error!(aggregate, error = %cause, "storage failure");
    ApiError::InternalServerError("storage error".to_string())
}
