use chrono::NaiveDate;
use thiserror::Error;

/// Error for VacationId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VacationIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for vacation status parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VacationStatusError {
    #[error("Unknown vacation status: {0}")]
    Unknown(String),
}

/// Top-level error for vacation operations
#[derive(Debug, Clone, Error)]
pub enum VacationError {
    #[error("Invalid vacation ID: {0}")]
    InvalidVacationId(#[from] VacationIdError),

    #[error("Invalid vacation status: {0}")]
    InvalidStatus(#[from] VacationStatusError),

    #[error("Vacation not found: {0}")]
    NotFound(String),

    #[error("Vacation owner not found: {0}")]
    OwnerNotFound(String),

    #[error("End date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
