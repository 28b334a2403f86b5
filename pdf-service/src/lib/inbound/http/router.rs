use std::sync::Arc;
use std::time::Duration;

use auth::JwtHandler;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::download_pdf::download_pdf;
use super::handlers::enqueue_pdf::enqueue_pdf;
use super::middleware::authenticate;
use crate::document::ports::TaskQueue;
use crate::document::renderer::ProfileRenderer;

/// Shared request state; cheap to clone per request.
pub struct AppState<Q: TaskQueue> {
    pub renderer: Arc<ProfileRenderer>,
    pub queue: Arc<Q>,
}

// Manual impl: `Q` itself need not be Clone behind the Arc
impl<Q: TaskQueue> Clone for AppState<Q> {
    fn clone(&self) -> Self {
        Self {
            renderer: Arc::clone(&self.renderer),
            queue: Arc::clone(&self.queue),
        }
    }
}

pub fn create_router<Q: TaskQueue>(
    renderer: Arc<ProfileRenderer>,
    queue: Arc<Q>,
    jwt_handler: Arc<JwtHandler>,
) -> Router {
    let state = AppState { renderer, queue };

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

    // Every document route sits behind the token guard
    Router::new()
        .route("/api/pdf/download", get(download_pdf::<Q>))
        .route("/api/pdf/enqueue", post(enqueue_pdf::<Q>))
        .route_layer(middleware::from_fn_with_state(jwt_handler, authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
