use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::CreateProject;
use crate::inbound::http::handlers::projects::ProjectResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_project(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateProjectRequest>,
) -> Result<ApiSuccess<ProjectResponseData>, ApiError> {
    if body.name.is_empty() {
        return Err(ApiError::BadRequest("project name is required".to_string()));
    }

    let project = state
        .store
        .create_project(CreateProject { name: body.name })
        .await
        .map_err(ProjectError::from)?;

    tracing::info!(
        project_id = project.id,
        user_id = current_user.id,
        "project created"
    );

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        ProjectResponseData::from(&project),
    ))
}

/// HTTP request body for creating a project (raw JSON).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CreateProjectRequest {
    name: String,
}
