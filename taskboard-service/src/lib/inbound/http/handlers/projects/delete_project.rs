use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::project::errors::ProjectError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Deletes a project. Deletion is idempotent: a second delete of the same
/// id, or an id that never existed, still answers `204`.
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(project_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let rows_affected = state
        .store
        .delete_project(&project_id)
        .await
        .map_err(ProjectError::from)?;

    tracing::info!(
        project_id = %project_id,
        rows_affected,
        user_id = current_user.id,
        "project deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
