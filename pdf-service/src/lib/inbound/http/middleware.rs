use std::sync::Arc;

use auth::JwtHandler;
use auth::UserClaims;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;

/// Extension type carrying the validated claims through the request.
///
/// Presence of this extension means the bearer token verified against this
/// service's signing configuration. No database was consulted: the token is
/// the only source of identity on this side of the boundary.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserClaims);

/// Middleware guarding every document route.
///
/// Requires `Authorization: Bearer <token>`; decodes the token with this
/// service's own codec and parses the payload straight into the shared
/// claim schema. A missing or renamed field is a validation failure like
/// any other. All token faults collapse into one 401 body; the sub-reason
/// goes to the server log only.
pub async fn authenticate(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?;

    let claims: UserClaims = jwt_handler.decode(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    req.extensions_mut().insert(CurrentUser(claims));

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing or invalid Authorization header".to_string())
        })?;

    header.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized("Missing or invalid Authorization header".to_string())
    })
}
