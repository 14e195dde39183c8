use std::collections::HashMap;

use axum::extract::Query;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;

/// Authenticated principal for the current request, inserted into request
/// extensions by [`authenticate`]. Handlers downstream read it instead of
/// re-deriving identity from the token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
}

/// Middleware guarding the protected routes.
///
/// Resolves a token from the request, validates its signature and expiry,
/// and confirms the subject still exists in the store. On success the
/// request proceeds with a [`CurrentUser`] extension; on any failure the
/// request is rejected with `401` before reaching a handler.
///
/// All validation failures collapse into the same `permission denied`
/// response so the body never reveals which check failed. Only a valid
/// token whose subject no longer exists is answered differently.
pub async fn authenticate(
    State(state): State<AppState>,
    query: Option<Query<HashMap<String, String>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    // An absent token becomes the empty string, which fails to parse, so a
    // missing credential is rejected through the same path as a bad one.
    let token = extract_token(&req, query.as_ref().map(|params| &params.0));

    let claims = state.jwt_handler.validate(token).map_err(|err| {
        tracing::warn!(error = %err, "token validation failed");
        unauthorized("permission denied")
    })?;

    let user = state
        .store
        .get_user_by_id(&claims.sub)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to look up token subject");
            unauthorized("permission denied")
        })?
        .ok_or_else(|| {
            tracing::warn!(subject = %claims.sub, "token subject no longer exists");
            unauthorized("invalid jwt token")
        })?;

    req.extensions_mut().insert(CurrentUser {
        id: user.id,
        email: user.email,
    });

    Ok(next.run(req).await)
}

/// Pulls the token from the `Authorization` header, falling back to the
/// `token` query parameter. The header value is used verbatim, with no
/// scheme prefix stripped. Returns an empty string when neither carries
/// a value.
fn extract_token<'a>(req: &'a Request, query: Option<&'a HashMap<String, String>>) -> &'a str {
    let header_token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if !header_token.is_empty() {
        return header_token;
    }

    query
        .and_then(|params| params.get("token"))
        .map(String::as_str)
        .unwrap_or("")
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
}
