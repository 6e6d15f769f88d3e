use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use super::authorize;
use super::ApiError;
use super::ApiSuccess;
use super::VacationData;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffId;
use crate::domain::vacation::models::CreateVacationCommand;
use crate::inbound::http::middleware::AuthenticatedStaff;
use crate::inbound::http::router::AppState;

/// Schedule a vacation for a user. Kadr staff manage vacations.
pub async fn create_vacation(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedStaff>,
    body: Option<Json<CreateVacationRequest>>,
) -> Result<ApiSuccess<VacationData>, ApiError> {
    authorize(&caller, &[Role::Kadr])?;

    let Some(Json(body)) = body else {
        return Err(ApiError::BadRequest("Missing or malformed vacation payload".to_string()));
    };

    let vacation = state
        .vacations
        .create(CreateVacationCommand {
            user_id: StaffId(body.user_id),
            start_date: body.start_date,
            end_date: body.end_date,
        })
        .await?;

    Ok(ApiSuccess::new(StatusCode::CREATED, (&vacation).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateVacationRequest {
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
