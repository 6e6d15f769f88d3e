use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginGrant;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::staff::models::Role;
use crate::domain::staff::ports::StaffRepository;

/// The login protocol, written once and parameterized by role directory.
///
/// Every role family authenticates the same way: exact email lookup in
/// that family's directory, hashed password verification, then a token
/// carrying the account's id and role. A missing account and a failed
/// verification collapse into the same `InvalidCredentials` outcome so
/// the response never reveals which of the two happened.
pub struct AuthService<D>
where
    D: StaffRepository,
{
    directories: HashMap<Role, Arc<D>>,
    authenticator: Arc<Authenticator>,
}

impl<D> AuthService<D>
where
    D: StaffRepository,
{
    /// # Arguments
    /// * `directories` - One account directory per supported role
    /// * `authenticator` - Shared password verifier and token issuer
    pub fn new(directories: HashMap<Role, Arc<D>>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directories,
            authenticator,
        }
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: StaffRepository,
{
    async fn login(&self, role: Role, command: LoginCommand) -> Result<LoginGrant, AuthError> {
        let directory = self
            .directories
            .get(&role)
            .ok_or(AuthError::DirectoryUnavailable(role))?;

        let account = directory
            .find_by_email(&command.email)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        // Unknown email takes the same path as a wrong password
        let Some(account) = account else {
            tracing::debug!(role = %role, "Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        let token = self
            .authenticator
            .authenticate(
                &command.password,
                &account.password_hash,
                &account.id.to_string(),
                account.role.as_str(),
            )
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                auth::AuthenticationError::Token(e) => AuthError::TokenGeneration(e.to_string()),
            })?;

        Ok(LoginGrant {
            token,
            email: account.email.as_str().to_string(),
        })
    }
}
