use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::task::errors::TaskError;
use crate::inbound::http::handlers::tasks::TaskResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Fetches a task by id. Non-integer ids produce the same `404` as
/// missing rows.
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<ApiSuccess<TaskResponseData>, ApiError> {
    let task = state
        .store
        .get_task(&task_id)
        .await
        .map_err(TaskError::from)?
        .ok_or(TaskError::NotFound)?;

    Ok(ApiSuccess::new(StatusCode::OK, TaskResponseData::from(&task)))
}
