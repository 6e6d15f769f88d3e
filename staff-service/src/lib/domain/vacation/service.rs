use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::notification::messages::MailMessage;
use crate::domain::notification::ports::NotificationGateway;
use crate::domain::staff::ports::StaffRepository;
use crate::domain::vacation::errors::VacationError;
use crate::domain::vacation::models::CreateVacationCommand;
use crate::domain::vacation::models::UpdateVacationCommand;
use crate::domain::vacation::models::Vacation;
use crate::domain::vacation::models::VacationId;
use crate::domain::vacation::models::VacationStatus;
use crate::domain::vacation::ports::VacationRepository;
use crate::domain::vacation::ports::VacationServicePort;

/// Vacation workflow: schedule and reschedule leave, then mail the owner.
///
/// The owner is resolved from the users directory BEFORE any write, so a
/// missing owner fails the whole operation with nothing committed. The
/// mail itself is built from the committed record and dispatched
/// best-effort afterwards; the two steps are not transactional and a
/// failed send is logged, never propagated (at-most-once delivery).
pub struct VacationService<VR, SR, N>
where
    VR: VacationRepository,
    SR: StaffRepository,
    N: NotificationGateway,
{
    vacations: Arc<VR>,
    users: Arc<SR>,
    notifier: Arc<N>,
}

impl<VR, SR, N> VacationService<VR, SR, N>
where
    VR: VacationRepository,
    SR: StaffRepository,
    N: NotificationGateway,
{
    /// # Arguments
    /// * `vacations` - Vacation record persistence
    /// * `users` - The User directory vacations are owned by
    /// * `notifier` - Mail gateway for owner notifications
    pub fn new(vacations: Arc<VR>, users: Arc<SR>, notifier: Arc<N>) -> Self {
        Self {
            vacations,
            users,
            notifier,
        }
    }

    fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), VacationError> {
        if end < start {
            return Err(VacationError::InvalidDateRange { start, end });
        }
        Ok(())
    }

    async fn dispatch(&self, message: MailMessage) {
        if let Err(e) = self.notifier.send(message).await {
            tracing::error!("Failed to send vacation notification: {}", e);
        }
    }
}

#[async_trait]
impl<VR, SR, N> VacationServicePort for VacationService<VR, SR, N>
where
    VR: VacationRepository,
    SR: StaffRepository,
    N: NotificationGateway,
{
    async fn create(&self, command: CreateVacationCommand) -> Result<Vacation, VacationError> {
        Self::check_range(command.start_date, command.end_date)?;

        let owner = self
            .users
            .find_by_id(&command.user_id)
            .await
            .map_err(|e| VacationError::DatabaseError(e.to_string()))?
            .ok_or(VacationError::OwnerNotFound(command.user_id.to_string()))?;

        let vacation = Vacation {
            id: VacationId::new(),
            user_id: owner.id,
            start_date: command.start_date,
            end_date: command.end_date,
            status: VacationStatus::Coming,
        };

        let created = self.vacations.insert(vacation).await?;

        self.dispatch(MailMessage::vacation_scheduled(&owner, &created))
            .await;

        Ok(created)
    }

    async fn get(&self, id: &VacationId) -> Result<Vacation, VacationError> {
        self.vacations
            .find_by_id(id)
            .await?
            .ok_or(VacationError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<Vacation>, VacationError> {
        self.vacations.list_all().await
    }

    async fn update(&self, command: UpdateVacationCommand) -> Result<Vacation, VacationError> {
        Self::check_range(command.start_date, command.end_date)?;

        let existing = self
            .vacations
            .find_by_id(&command.id)
            .await?
            .ok_or(VacationError::NotFound(command.id.to_string()))?;

        // The stored owner is the one notified; callers cannot redirect
        // the mail by naming someone else.
        let owner = self
            .users
            .find_by_id(&existing.user_id)
            .await
            .map_err(|e| VacationError::DatabaseError(e.to_string()))?
            .ok_or(VacationError::OwnerNotFound(existing.user_id.to_string()))?;

        let vacation = Vacation {
            id: existing.id,
            user_id: existing.user_id,
            start_date: command.start_date,
            end_date: command.end_date,
            status: command.status,
        };

        let updated = self.vacations.update(vacation).await?;

        self.dispatch(MailMessage::vacation_changed(&owner, &updated))
            .await;

        Ok(updated)
    }
}
