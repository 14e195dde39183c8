use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Registers a new account and signs the caller in.
///
/// The password is hashed before it goes anywhere near the store. The
/// response carries the freshly issued token both in the JSON body and as
/// an `Authorization` cookie, so browser and API clients pick it up the
/// same way.
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<Response, ApiError> {
    body.validate()?;

    let hashed_password = state.password_hasher.hash(&body.password).map_err(|err| {
        tracing::error!(error = %err, "password hashing failed");
        ApiError::InternalServerError("error hashing password".to_string())
    })?;

    let user = state
        .store
        .create_user(CreateUser {
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            password: hashed_password,
        })
        .await
        .map_err(UserError::from)?;

    let token = state.jwt_handler.issue(user.id).map_err(|err| {
        tracing::error!(error = %err, "token issuance failed");
        ApiError::InternalServerError("error while setting cookie".to_string())
    })?;

    tracing::info!(user_id = user.id, "user registered");

    let cookie = HeaderValue::from_str(&format!("Authorization={token}"))
        .map_err(|_| ApiError::InternalServerError("error while setting cookie".to_string()))?;

    let mut response =
        ApiSuccess::new(StatusCode::CREATED, RegisterUserResponseData { token }).into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);

    Ok(response)
}

/// HTTP request body for registration (raw JSON). Missing fields
/// deserialize to empty strings and are caught by [`Self::validate`],
/// so absent and blank fields produce the same error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RegisterUserRequest {
    email: String,
    first_name: String,
    last_name: String,
    password: String,
}

impl RegisterUserRequest {
    /// Field checks run in a fixed order and the first failure wins.
    fn validate(&self) -> Result<(), ApiError> {
        if self.email.is_empty() {
            return Err(ApiError::BadRequest("email is required".to_string()));
        }
        if self.first_name.is_empty() {
            return Err(ApiError::BadRequest("first name is required".to_string()));
        }
        if self.last_name.is_empty() {
            return Err(ApiError::BadRequest("last name is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(ApiError::BadRequest("password is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserResponseData {
    pub token: String,
}
