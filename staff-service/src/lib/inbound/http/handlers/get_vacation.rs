use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::VacationData;
use crate::domain::vacation::models::VacationId;
use crate::inbound::http::router::AppState;

/// Look up one vacation. Readable by any authenticated principal.
pub async fn get_vacation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<VacationData>, ApiError> {
    let id = VacationId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .vacations
        .get(&id)
        .await
        .map_err(ApiError::from)
        .map(|ref vacation| ApiSuccess::new(StatusCode::OK, vacation.into()))
}
