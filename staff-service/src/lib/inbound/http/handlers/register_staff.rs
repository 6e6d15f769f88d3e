use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use super::authorize;
use super::parse_role;
use super::validate_request;
use super::ApiError;
use super::ApiSuccess;
use super::StaffData;
use crate::domain::staff::models::CreateStaffCommand;
use crate::domain::staff::models::EmailAddress;
use crate::domain::staff::models::Role;
use crate::inbound::http::middleware::AuthenticatedStaff;
use crate::inbound::http::router::AppState;

/// Register a staff account in one role family. Admin-only, for every
/// family.
pub async fn register_staff(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Extension(caller): Extension<AuthenticatedStaff>,
    body: Option<Json<RegisterStaffRequest>>,
) -> Result<ApiSuccess<StaffData>, ApiError> {
    let role = parse_role(&role)?;
    authorize(&caller, &[Role::Admin])?;

    let Some(Json(body)) = body else {
        return Err(ApiError::BadRequest(
            "Missing or malformed registration payload".to_string(),
        ));
    };
    validate_request(&body)?;

    let account = state
        .directory(role)
        .register(body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(StatusCode::CREATED, (&account).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegisterStaffRequest {
    #[validate(length(min = 1, message = "Please provide valid firstname"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Please provide valid lastname"))]
    pub last_name: String,

    #[validate(email(message = "Please provide valid email"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must contain at least 8 characters"))]
    pub password: String,
}

impl RegisterStaffRequest {
    fn try_into_command(self) -> Result<CreateStaffCommand, ApiError> {
        let email = EmailAddress::new(self.email)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(CreateStaffCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            password: self.password,
        })
    }
}
