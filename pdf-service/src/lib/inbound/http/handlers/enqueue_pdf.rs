use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::document::ports::TaskQueue;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Queue an asynchronous render-and-upload job for the caller's profile.
pub async fn enqueue_pdf<Q: TaskQueue>(
    State(state): State<AppState<Q>>,
    Extension(CurrentUser(claims)): Extension<CurrentUser>,
) -> Result<(StatusCode, Json<EnqueueResponseData>), ApiError> {
    state.queue.enqueue_render(&claims).await?;
    tracing::info!(user_id = %claims.id, "Render task queued");

    Ok((
        StatusCode::ACCEPTED,
        Json(EnqueueResponseData {
            status: "queued".to_string(),
            id: claims.id.to_string(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnqueueResponseData {
    pub status: String,
    pub id: String,
}
