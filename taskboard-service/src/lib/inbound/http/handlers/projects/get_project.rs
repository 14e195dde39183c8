use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::project::errors::ProjectError;
use crate::inbound::http::handlers::projects::ProjectResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Fetches a project by id. Non-integer ids produce the same `404` as
/// missing rows.
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<ApiSuccess<ProjectResponseData>, ApiError> {
    let project = state
        .store
        .get_project(&project_id)
        .await
        .map_err(ProjectError::from)?
        .ok_or(ProjectError::NotFound)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ProjectResponseData::from(&project),
    ))
}
