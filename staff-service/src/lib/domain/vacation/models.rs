use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::staff::models::StaffId;
use crate::domain::vacation::errors::VacationIdError;
use crate::domain::vacation::errors::VacationStatusError;

/// Vacation unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VacationId(pub Uuid);

impl VacationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, VacationIdError> {
        Uuid::parse_str(s)
            .map(VacationId)
            .map_err(|e| VacationIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for VacationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VacationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed vacation lifecycle tag.
///
/// Operator-set; the service does not impose a Coming -> Active ->
/// Finished ordering, any status may replace any other on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VacationStatus {
    Coming,
    Active,
    Finished,
}

impl VacationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VacationStatus::Coming => "Coming",
            VacationStatus::Active => "Active",
            VacationStatus::Finished => "Finished",
        }
    }
}

impl fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VacationStatus {
    type Err = VacationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Coming" => Ok(VacationStatus::Coming),
            "Active" => Ok(VacationStatus::Active),
            "Finished" => Ok(VacationStatus::Finished),
            other => Err(VacationStatusError::Unknown(other.to_string())),
        }
    }
}

/// A time-bounded leave record owned by a User account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacation {
    pub id: VacationId,
    pub user_id: StaffId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
}

/// Command to schedule a vacation for a user.
///
/// The end date is explicit and independent of the start date; new
/// vacations always start in `Coming`.
#[derive(Debug)]
pub struct CreateVacationCommand {
    pub user_id: StaffId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Command to overwrite an existing vacation's dates and status.
///
/// The owning user is never changed by an update.
#[derive(Debug)]
pub struct UpdateVacationCommand {
    pub id: VacationId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            VacationStatus::Coming,
            VacationStatus::Active,
            VacationStatus::Finished,
        ] {
            assert_eq!(status.as_str().parse::<VacationStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_rejects_anything_else() {
        assert!("Cancelled".parse::<VacationStatus>().is_err());
        assert!("coming".parse::<VacationStatus>().is_err());
    }
}
