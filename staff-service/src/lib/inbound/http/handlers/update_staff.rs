use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::authorize;
use super::parse_role;
use super::validate_request;
use super::ApiError;
use super::ApiSuccess;
use super::StaffData;
use crate::domain::staff::models::EmailAddress;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffId;
use crate::domain::staff::models::UpdateStaffCommand;
use crate::inbound::http::middleware::AuthenticatedStaff;
use crate::inbound::http::router::AppState;

/// Kadr staff may maintain user accounts; everything else is Admin-only.
fn allowed_updaters(target: Role) -> &'static [Role] {
    match target {
        Role::User => &[Role::Admin, Role::Kadr],
        _ => &[Role::Admin],
    }
}

/// Overwrite every field of an existing account.
pub async fn update_staff(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Extension(caller): Extension<AuthenticatedStaff>,
    body: Option<Json<UpdateStaffRequest>>,
) -> Result<ApiSuccess<StaffData>, ApiError> {
    let role = parse_role(&role)?;
    authorize(&caller, allowed_updaters(role))?;

    let Some(Json(body)) = body else {
        return Err(ApiError::BadRequest("Missing or malformed update payload".to_string()));
    };
    validate_request(&body)?;

    let account = state
        .directory(role)
        .update(body.try_into_command()?)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, (&account).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateStaffRequest {
    pub id: Uuid,

    #[validate(length(min = 1, message = "Please provide valid firstname"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Please provide valid lastname"))]
    pub last_name: String,

    #[validate(email(message = "Please provide valid email"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must contain at least 8 characters"))]
    pub password: String,
}

impl UpdateStaffRequest {
    fn try_into_command(self) -> Result<UpdateStaffCommand, ApiError> {
        let email = EmailAddress::new(self.email)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(UpdateStaffCommand {
            id: StaffId(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            password: self.password,
        })
    }
}
