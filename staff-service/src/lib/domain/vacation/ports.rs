use async_trait::async_trait;

use crate::domain::vacation::errors::VacationError;
use crate::domain::vacation::models::CreateVacationCommand;
use crate::domain::vacation::models::UpdateVacationCommand;
use crate::domain::vacation::models::Vacation;
use crate::domain::vacation::models::VacationId;

/// Port for the vacation workflow.
#[async_trait]
pub trait VacationServicePort: Send + Sync + 'static {
    /// Schedule a vacation for an existing user and notify them.
    ///
    /// # Errors
    /// * `InvalidDateRange` - End date precedes start date
    /// * `OwnerNotFound` - The target user does not exist (checked before
    ///   any write)
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, command: CreateVacationCommand) -> Result<Vacation, VacationError>;

    /// Retrieve a vacation by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Vacation does not exist
    async fn get(&self, id: &VacationId) -> Result<Vacation, VacationError>;

    /// Retrieve all vacations.
    async fn list(&self) -> Result<Vec<Vacation>, VacationError>;

    /// Overwrite an existing vacation's dates and status, then notify the
    /// stored owner.
    ///
    /// # Errors
    /// * `InvalidDateRange` - End date precedes start date
    /// * `NotFound` - Vacation does not exist
    /// * `OwnerNotFound` - The stored owner no longer exists (checked
    ///   before any write)
    /// * `DatabaseError` - Storage operation failed
    async fn update(&self, command: UpdateVacationCommand) -> Result<Vacation, VacationError>;
}

/// Persistence operations for vacation records.
///
/// There is no delete: vacations are never removed, only rescheduled or
/// driven through their status tags.
#[async_trait]
pub trait VacationRepository: Send + Sync + 'static {
    /// Persist a new vacation record.
    async fn insert(&self, vacation: Vacation) -> Result<Vacation, VacationError>;

    /// Retrieve a vacation by identifier.
    ///
    /// # Returns
    /// None if not found
    async fn find_by_id(&self, id: &VacationId) -> Result<Option<Vacation>, VacationError>;

    /// Retrieve all vacation records.
    async fn list_all(&self) -> Result<Vec<Vacation>, VacationError>;

    /// Overwrite an existing vacation record.
    ///
    /// # Errors
    /// * `NotFound` - Vacation does not exist
    async fn update(&self, vacation: Vacation) -> Result<Vacation, VacationError>;
}
