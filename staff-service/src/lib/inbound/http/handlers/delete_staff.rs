use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::authorize;
use super::parse_role;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffId;
use crate::inbound::http::middleware::AuthenticatedStaff;
use crate::inbound::http::router::AppState;

/// Hard-delete an account by id. Admin-only, for every family.
pub async fn delete_staff(
    State(state): State<AppState>,
    Path((role, id)): Path<(String, String)>,
    Extension(caller): Extension<AuthenticatedStaff>,
) -> Result<ApiSuccess<()>, ApiError> {
    let role = parse_role(&role)?;
    authorize(&caller, &[Role::Admin])?;

    let id = StaffId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .directory(role)
        .delete(&id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
