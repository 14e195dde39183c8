use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Fetches a user by id. Ids that do not parse as integers fall through
/// to the same `404` as ids with no row behind them.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let user = state
        .store
        .get_user_by_id(&user_id)
        .await
        .map_err(UserError::from)?
        .ok_or(UserError::NotFound)?;

    Ok(ApiSuccess::new(StatusCode::OK, UserResponseData::from(&user)))
}

/// User payload serialized into responses. The password hash is not part
/// of this shape and cannot leak through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_data_omits_password_hash() {
        let user = User {
            id: 1,
            email: "bob@example.com".to_string(),
            first_name: "bob".to_string(),
            last_name: "cj".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$secret".to_string(),
            created_at: Utc::now(),
        };

        let body = serde_json::to_value(UserResponseData::from(&user)).unwrap();
        assert_eq!(body["email"], "bob@example.com");
        assert!(body.get("password").is_none());
    }
}
