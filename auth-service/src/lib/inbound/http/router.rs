use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::signup::signup;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::AccountService;

/// Shared request state; cheap to clone per request.
pub struct AppState<UR: UserRepository> {
    pub account_service: Arc<AccountService<UR>>,
}

// Manual impl: `UR` itself need not be Clone behind the Arc
impl<UR: UserRepository> Clone for AppState<UR> {
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
        }
    }
}

pub fn create_router<UR: UserRepository>(account_service: Arc<AccountService<UR>>) -> Router {
    let state = AppState { account_service };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
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
        .route("/api/auth/signup", post(signup::<UR>))
        .route("/api/auth/login", post(login::<UR>))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
