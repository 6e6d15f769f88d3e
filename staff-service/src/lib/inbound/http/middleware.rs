use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated principal through a request.
#[derive(Debug, Clone)]
pub struct AuthenticatedStaff {
    pub staff_id: StaffId,
    pub role: Role,
}

/// Middleware that validates bearer tokens and stores the caller's
/// identity and role claim in request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    let staff_id = StaffId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!("Malformed subject claim: {}", e);
        ApiError::Unauthorized("Invalid token format".to_string()).into_response()
    })?;

    let role = claims.role.parse::<Role>().map_err(|e| {
        tracing::warn!("Malformed role claim: {}", e);
        ApiError::Unauthorized("Invalid token format".to_string()).into_response()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedStaff { staff_id, role });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    if !auth_str.starts_with("Bearer ") {
        return Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
        .into_response());
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
