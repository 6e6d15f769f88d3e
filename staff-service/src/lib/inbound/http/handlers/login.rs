use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::parse_role;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::LoginCommand;
use crate::inbound::http::router::AppState;

/// One login endpoint for all four role families; the path segment picks
/// the directory the credentials are checked against.
pub async fn login(
    State(state): State<AppState>,
    Path(role): Path<String>,
    body: Option<Json<LoginRequestBody>>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let role = parse_role(&role)?;

    // A missing payload is a malformed request, rejected before any lookup
    let Some(Json(body)) = body else {
        return Err(ApiError::BadRequest("Missing or malformed login payload".to_string()));
    };

    let grant = state
        .auth_service
        .login(
            role,
            LoginCommand {
                email: body.email,
                password: body.password,
            },
        )
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: grant.token,
            email: grant.email,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub email: String,
}
