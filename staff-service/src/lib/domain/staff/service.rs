use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::notification::messages::MailMessage;
use crate::domain::notification::ports::NotificationGateway;
use crate::domain::staff::errors::StaffError;
use crate::domain::staff::models::CreateStaffCommand;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffAccount;
use crate::domain::staff::models::StaffId;
use crate::domain::staff::models::UpdateStaffCommand;
use crate::domain::staff::ports::StaffRepository;
use crate::domain::staff::ports::StaffServicePort;

/// Account management flow for one role directory.
///
/// The same service type covers all four role families; only the injected
/// repository instance and the role tag differ. Registration pre-checks
/// email uniqueness for every family except Admin, whose directory has no
/// uniqueness guarantee at any layer.
pub struct StaffService<R, N>
where
    R: StaffRepository,
    N: NotificationGateway,
{
    role: Role,
    repository: Arc<R>,
    notifier: Arc<N>,
    password_hasher: auth::PasswordHasher,
}

impl<R, N> StaffService<R, N>
where
    R: StaffRepository,
    N: NotificationGateway,
{
    /// # Arguments
    /// * `role` - Role family this instance manages
    /// * `repository` - Directory persistence for that family
    /// * `notifier` - Mail gateway for post-commit notifications
    pub fn new(role: Role, repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            role,
            repository,
            notifier,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    /// Post-commit dispatch; failures are logged, never propagated.
    async fn dispatch(&self, message: MailMessage) {
        if let Err(e) = self.notifier.send(message).await {
            tracing::error!(role = %self.role, "Failed to send account notification: {}", e);
        }
    }
}

#[async_trait]
impl<R, N> StaffServicePort for StaffService<R, N>
where
    R: StaffRepository,
    N: NotificationGateway,
{
    fn role(&self) -> Role {
        self.role
    }

    async fn register(&self, command: CreateStaffCommand) -> Result<StaffAccount, StaffError> {
        // Pre-existence check, accepting the race window; the admins
        // directory carries no uniqueness guarantee at all.
        if self.role != Role::Admin {
            let existing = self.repository.find_by_email(command.email.as_str()).await?;
            if existing.is_some() {
                return Err(StaffError::EmailAlreadyExists(
                    command.email.as_str().to_string(),
                ));
            }
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| StaffError::PasswordHashing(e.to_string()))?;

        let now = Utc::now();
        let account = StaffAccount {
            id: StaffId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            role: self.role,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(account).await?;

        self.dispatch(MailMessage::staff_welcome(&created)).await;

        Ok(created)
    }

    async fn get(&self, id: &StaffId) -> Result<StaffAccount, StaffError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(StaffError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<StaffAccount>, StaffError> {
        self.repository.list_all().await
    }

    async fn update(&self, command: UpdateStaffCommand) -> Result<StaffAccount, StaffError> {
        let existing = self
            .repository
            .find_by_id(&command.id)
            .await?
            .ok_or(StaffError::NotFound(command.id.to_string()))?;

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| StaffError::PasswordHashing(e.to_string()))?;

        // Full-field overwrite; id, role and created_at are immutable.
        let account = StaffAccount {
            id: existing.id,
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            role: existing.role,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        let updated = self.repository.update(account).await?;

        self.dispatch(MailMessage::credentials_updated(&updated))
            .await;

        Ok(updated)
    }

    async fn delete(&self, id: &StaffId) -> Result<(), StaffError> {
        self.repository.delete(id).await
    }
}
