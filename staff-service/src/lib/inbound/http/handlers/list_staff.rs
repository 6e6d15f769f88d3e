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
use crate::inbound::http::middleware::AuthenticatedStaff;
use crate::inbound::http::router::AppState;

/// The user roster is visible to all management roles; the management
/// families themselves only to Admins.
fn allowed_listers(target: Role) -> &'static [Role] {
    match target {
        Role::User => &[Role::Admin, Role::Kadr, Role::Director],
        _ => &[Role::Admin],
    }
}

pub async fn list_staff(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Extension(caller): Extension<AuthenticatedStaff>,
) -> Result<ApiSuccess<Vec<StaffData>>, ApiError> {
    let role = parse_role(&role)?;
    authorize(&caller, allowed_listers(role))?;

    let accounts = state.directory(role).list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        accounts.iter().map(StaffData::from).collect(),
    ))
}
