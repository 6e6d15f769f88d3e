use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::staff::errors::EmailError;
use crate::staff::errors::RoleError;
use crate::staff::errors::StaffIdError;

/// Closed set of account roles.
///
/// The role doubles as the data-model tag and the authorization claim
/// value carried in issued tokens. It is fixed at account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Director,
    Kadr,
    User,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Director, Role::Kadr, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Director => "Director",
            Role::Kadr => "Kadr",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "director" => Ok(Role::Director),
            "kadr" => Ok(Role::Kadr),
            "user" => Ok(Role::User),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

/// Staff account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaffId(pub Uuid);

impl StaffId {
    /// Generate a new random staff ID.
    ///
    /// Ids are always system-generated, never client-supplied.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a staff ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, StaffIdError> {
        Uuid::parse_str(s)
            .map(StaffId)
            .map_err(|e| StaffIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for StaffId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address value type
///
/// Validates email format using RFC 5322 compliant parser. Lookups are
/// exact-match on the stored form; no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Staff account aggregate entity.
///
/// One shape for all four role families; the `role` tag and the directory
/// the account lives in always agree.
#[derive(Debug, Clone)]
pub struct StaffAccount {
    pub id: StaffId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StaffAccount {
    /// Full display name used in notification mail.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Command to register a new staff account with domain types.
///
/// The role is not part of the command; it comes from the directory the
/// command is executed against.
#[derive(Debug)]
pub struct CreateStaffCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password: String,
}

/// Command to overwrite an existing staff account.
///
/// Updates are full-field overwrites: every field is required and the
/// password is re-hashed. There are no partial patch semantics.
#[derive(Debug)]
pub struct UpdateStaffCommand {
    pub id: StaffId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("kadr".parse::<Role>().unwrap(), Role::Kadr);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_email_address_valid() {
        let email = EmailAddress::new("a@x.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn test_email_address_invalid() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("".to_string()).is_err());
    }

    #[test]
    fn test_staff_id_parse() {
        let id = StaffId::new();
        let parsed = StaffId::from_string(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(StaffId::from_string("not-a-uuid").is_err());
    }
}
