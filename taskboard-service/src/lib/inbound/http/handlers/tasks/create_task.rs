use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTask;
use crate::inbound::http::handlers::tasks::TaskResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Creates a task inside a project. The store assigns the initial `TODO`
/// status.
pub async fn create_task(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<ApiSuccess<TaskResponseData>, ApiError> {
    body.validate()?;

    let task = state
        .store
        .create_task(CreateTask {
            name: body.name,
            project_id: body.project_id,
            assigned_to: body.assigned_to,
        })
        .await
        .map_err(TaskError::from)?;

    tracing::info!(task_id = task.id, user_id = current_user.id, "task created");

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        TaskResponseData::from(&task),
    ))
}

/// HTTP request body for creating a task (raw JSON). Absent fields take
/// their zero value and fail validation the same way blank ones do.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CreateTaskRequest {
    name: String,
    project_id: i64,
    assigned_to: i64,
}

impl CreateTaskRequest {
    /// Field checks run in a fixed order and the first failure wins. Zero
    /// ids count as missing; real rows never have id zero.
    fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::BadRequest("name is required".to_string()));
        }
        if self.project_id == 0 {
            return Err(ApiError::BadRequest("project id is required".to_string()));
        }
        if self.assigned_to == 0 {
            return Err(ApiError::BadRequest("user id is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateTaskRequest {
        CreateTaskRequest {
            name: "Creating REST APIs".to_string(),
            project_id: 1,
            assigned_to: 42,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_fail_in_order() {
        let cases = [
            (
                CreateTaskRequest {
                    name: String::new(),
                    ..valid_request()
                },
                "name is required",
            ),
            (
                CreateTaskRequest {
                    project_id: 0,
                    ..valid_request()
                },
                "project id is required",
            ),
            (
                CreateTaskRequest {
                    assigned_to: 0,
                    ..valid_request()
                },
                "user id is required",
            ),
        ];

        for (request, expected) in cases {
            assert_eq!(
                request.validate(),
                Err(ApiError::BadRequest(expected.to_string()))
            );
        }
    }

    #[test]
    fn test_absent_fields_deserialize_to_zero_values() {
        let request: CreateTaskRequest =
            serde_json::from_str(r#"{"name": "Creating REST APIs"}"#).unwrap();
        assert_eq!(
            request.validate(),
            Err(ApiError::BadRequest("project id is required".to_string()))
        );
    }
}
