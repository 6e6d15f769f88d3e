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
use crate::domain::vacation::models::UpdateVacationCommand;
use crate::domain::vacation::models::VacationId;
use crate::domain::vacation::models::VacationStatus;
use crate::inbound::http::middleware::AuthenticatedStaff;
use crate::inbound::http::router::AppState;

/// Overwrite a vacation's dates and status. The status value is a closed
/// enum; anything outside it is rejected at deserialization.
pub async fn update_vacation(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedStaff>,
    body: Option<Json<UpdateVacationRequest>>,
) -> Result<ApiSuccess<VacationData>, ApiError> {
    authorize(&caller, &[Role::Kadr])?;

    let Some(Json(body)) = body else {
        return Err(ApiError::BadRequest("Missing or malformed vacation payload".to_string()));
    };

    let vacation = state
        .vacations
        .update(UpdateVacationCommand {
            id: VacationId(body.id),
            start_date: body.start_date,
            end_date: body.end_date,
            status: body.status,
        })
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, (&vacation).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateVacationRequest {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
}
