use std::sync::Arc;
use std::time::Duration;

use auth::JwtHandler;
use auth::PasswordHasher;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health;
use super::handlers::projects::create_project;
use super::handlers::projects::delete_project;
use super::handlers::projects::get_project;
use super::handlers::tasks::create_task;
use super::handlers::tasks::get_task;
use super::handlers::users::get_user;
use super::handlers::users::register_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::ports::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt_handler: Arc<JwtHandler>,
    pub password_hasher: Arc<PasswordHasher>,
}

/// Builds the application router.
///
/// Registration is the only route reachable without a token; everything
/// else under `/api/v1` sits behind the authentication middleware. The
/// health probe lives at the server root, outside the versioned prefix.
pub fn create_router(store: Arc<dyn Store>, jwt_handler: Arc<JwtHandler>) -> Router {
    let state = AppState {
        store,
        jwt_handler,
        password_hasher: Arc::new(PasswordHasher::new()),
    };

    let public_routes = Router::new().route("/users/register", post(register_user));

    let protected_routes = Router::new()
        .route("/users/:user_id", get(get_user))
        .route("/tasks", post(create_task))
        .route("/tasks/:task_id", get(get_task))
        .route("/projects", post(create_project))
        .route("/projects/:project_id", get(get_project))
        .route("/projects/:project_id", delete(delete_project))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Spans record the path only. The full URI can carry a token in the
    // query string and must stay out of the logs.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                path = %request.uri().path(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/", get(health))
        .nest("/api/v1", public_routes.merge(protected_routes))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
