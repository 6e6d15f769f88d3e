use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;
use validator::Validate;

use crate::domain::auth::errors::AuthError;
use crate::domain::staff::errors::StaffError;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffAccount;
use crate::domain::vacation::errors::VacationError;
use crate::domain::vacation::models::Vacation;
use crate::domain::vacation::models::VacationStatus;
use crate::inbound::http::middleware::AuthenticatedStaff;

pub mod create_vacation;
pub mod delete_staff;
pub mod get_staff;
pub mod get_vacation;
pub mod list_staff;
pub mod list_vacations;
pub mod login;
pub mod register_staff;
pub mod update_staff;
pub mod update_vacation;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// One field rule violation, FluentValidation-style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    /// All field violations of one request, surfaced together.
    Validation(Vec<FieldViolation>),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(violations) => {
                let status = StatusCode::BAD_REQUEST;
                return (
                    status,
                    Json(ApiResponseBody::new_validation_error(status, violations)),
                )
                    .into_response();
            }
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<StaffError> for ApiError {
    fn from(err: StaffError) -> Self {
        match err {
            StaffError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StaffError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            StaffError::InvalidStaffId(_)
            | StaffError::InvalidEmail(_)
            | StaffError::InvalidRole(_) => ApiError::UnprocessableEntity(err.to_string()),
            StaffError::PasswordHashing(_)
            | StaffError::DatabaseError(_)
            | StaffError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<VacationError> for ApiError {
    fn from(err: VacationError) -> Self {
        match err {
            VacationError::NotFound(_) | VacationError::OwnerNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            VacationError::InvalidDateRange { .. }
            | VacationError::InvalidVacationId(_)
            | VacationError::InvalidStatus(_) => ApiError::UnprocessableEntity(err.to_string()),
            VacationError::DatabaseError(_) | VacationError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // The uniform outcome for unknown email and wrong password alike
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::DirectoryUnavailable(_)
            | AuthError::TokenGeneration(_)
            | AuthError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                violations: None,
            },
        }
    }

    pub fn new_validation_error(
        status_code: StatusCode,
        violations: Vec<FieldViolation>,
    ) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message: "Validation failed".to_string(),
                violations: Some(violations),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

/// Staff account as exposed over the API; the password hash never leaves
/// the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&StaffAccount> for StaffData {
    fn from(account: &StaffAccount) -> Self {
        Self {
            id: account.id.to_string(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.as_str().to_string(),
            role: account.role.to_string(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Vacation record as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationData {
    pub id: String,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
}

impl From<&Vacation> for VacationData {
    fn from(vacation: &Vacation) -> Self {
        Self {
            id: vacation.id.to_string(),
            user_id: vacation.user_id.to_string(),
            start_date: vacation.start_date,
            end_date: vacation.end_date,
            status: vacation.status,
        }
    }
}

/// Run a request body through its declarative rules, collecting every
/// violation rather than stopping at the first.
pub(crate) fn validate_request<T: Validate>(body: &T) -> Result<(), ApiError> {
    let Err(errors) = body.validate() else {
        return Ok(());
    };

    let mut violations = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .clone()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            violations.push(FieldViolation {
                field: field.to_string(),
                message,
            });
        }
    }

    Err(ApiError::Validation(violations))
}

/// Gate a handler on the caller's role claim.
pub(crate) fn authorize(caller: &AuthenticatedStaff, allowed: &[Role]) -> Result<(), ApiError> {
    if allowed.contains(&caller.role) {
        return Ok(());
    }

    Err(ApiError::Forbidden(format!(
        "Role {} may not perform this operation",
        caller.role
    )))
}

/// Resolve a `:role` path segment to a staff family.
pub(crate) fn parse_role(raw: &str) -> Result<Role, ApiError> {
    raw.parse::<Role>()
        .map_err(|_| ApiError::NotFound(format!("Unknown staff role: {}", raw)))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 8, message = "Password must contain at least 8 characters"))]
        password: String,
        #[validate(email(message = "Please provide valid email"))]
        email: String,
    }

    #[test]
    fn test_all_violations_surface_together() {
        let probe = Probe {
            password: "short".to_string(),
            email: "not-an-email".to_string(),
        };

        let Err(ApiError::Validation(violations)) = validate_request(&probe) else {
            panic!("expected a validation error");
        };

        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.field == "password"
            && v.message == "Password must contain at least 8 characters"));
        assert!(violations.iter().any(|v| v.field == "email"));
    }

    #[test]
    fn test_valid_body_passes() {
        let probe = Probe {
            password: "long_enough".to_string(),
            email: "a@x.com".to_string(),
        };

        assert!(validate_request(&probe).is_ok());
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let err = ApiError::from(StaffError::EmailAlreadyExists("a@x.com".to_string()));
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_invalid_credentials_map_to_unauthorized() {
        let err = ApiError::from(AuthError::InvalidCredentials);
        assert_eq!(
            err,
            ApiError::Unauthorized("Invalid credentials".to_string())
        );
    }
}
