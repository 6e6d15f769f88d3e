use async_trait::async_trait;

use crate::domain::staff::errors::StaffError;
use crate::domain::staff::models::CreateStaffCommand;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffAccount;
use crate::domain::staff::models::StaffId;
use crate::domain::staff::models::UpdateStaffCommand;

/// Port for staff account operations over one role directory.
///
/// The service behind this port is instantiated once per role family;
/// the same protocol serves all four.
#[async_trait]
pub trait StaffServicePort: Send + Sync + 'static {
    /// Role family this service manages.
    fn role(&self) -> Role;

    /// Register a new staff account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered in this directory
    /// * `DatabaseError` - Storage operation failed
    async fn register(&self, command: CreateStaffCommand) -> Result<StaffAccount, StaffError>;

    /// Retrieve account by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn get(&self, id: &StaffId) -> Result<StaffAccount, StaffError>;

    /// Retrieve all accounts in this directory.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list(&self) -> Result<Vec<StaffAccount>, StaffError>;

    /// Overwrite an existing account's fields.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn update(&self, command: UpdateStaffCommand) -> Result<StaffAccount, StaffError>;

    /// Hard-delete an existing account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn delete(&self, id: &StaffId) -> Result<(), StaffError>;
}

/// Persistence operations for one staff directory.
#[async_trait]
pub trait StaffRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Storage-level uniqueness backstop tripped
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, account: StaffAccount) -> Result<StaffAccount, StaffError>;

    /// Retrieve account by identifier.
    ///
    /// # Returns
    /// None if not found
    async fn find_by_id(&self, id: &StaffId) -> Result<Option<StaffAccount>, StaffError>;

    /// Retrieve account by exact email match.
    ///
    /// # Returns
    /// None if not found
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffAccount>, StaffError>;

    /// Retrieve all accounts in the directory.
    async fn list_all(&self) -> Result<Vec<StaffAccount>, StaffError>;

    /// Overwrite an existing account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    async fn update(&self, account: StaffAccount) -> Result<StaffAccount, StaffError>;

    /// Remove an account.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    async fn delete(&self, id: &StaffId) -> Result<(), StaffError>;
}
