use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::authorize;
use super::ApiError;
use super::ApiSuccess;
use super::VacationData;
use crate::domain::staff::models::Role;
use crate::inbound::http::middleware::AuthenticatedStaff;
use crate::inbound::http::router::AppState;

/// The full vacation roster, for the staff who manage it.
pub async fn list_vacations(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedStaff>,
) -> Result<ApiSuccess<Vec<VacationData>>, ApiError> {
    authorize(&caller, &[Role::Kadr])?;

    let vacations = state.vacations.list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        vacations.iter().map(VacationData::from).collect(),
    ))
}
