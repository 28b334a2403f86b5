use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::HeaderValue;
use axum::Extension;

use super::ApiError;
use crate::document::ports::TaskQueue;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Render the caller's profile PDF and return it inline.
pub async fn download_pdf<Q: TaskQueue>(
    State(state): State<AppState<Q>>,
    Extension(CurrentUser(claims)): Extension<CurrentUser>,
) -> Result<(HeaderMap, Vec<u8>), ApiError> {
    let bytes = state.renderer.render(&claims)?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=profile_{}.pdf", claims.id))
            .map_err(|e| ApiError::InternalServerError(e.to_string()))?,
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("Content-Disposition"),
    );

    Ok((headers, bytes))
}
