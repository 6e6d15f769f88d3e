use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::authorize;
use super::parse_role;
use super::ApiError;
use super::ApiSuccess;
use super::StaffData;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffId;
use crate::inbound::http::middleware::AuthenticatedStaff;
use crate::inbound::http::router::AppState;

/// Any authenticated principal may look up a user; the management
/// families are visible to Admins only.
fn allowed_readers(target: Role) -> &'static [Role] {
    match target {
        Role::User => &Role::ALL,
        _ => &[Role::Admin],
    }
}

pub async fn get_staff(
    State(state): State<AppState>,
    Path((role, id)): Path<(String, String)>,
    Extension(caller): Extension<AuthenticatedStaff>,
) -> Result<ApiSuccess<StaffData>, ApiError> {
    let role = parse_role(&role)?;
    authorize(&caller, allowed_readers(role))?;

    let id = StaffId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .directory(role)
        .get(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
