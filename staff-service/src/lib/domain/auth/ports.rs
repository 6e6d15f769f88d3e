use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::LoginGrant;
use crate::domain::staff::models::Role;

/// Port for the role-parameterized login flow.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate credentials against one role's directory and issue a
    /// token scoped to the matched account's id and role.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (uniform)
    /// * `DirectoryUnavailable` - No directory wired for the role
    /// * `TokenGeneration` - Signing failed
    /// * `DatabaseError` - Lookup failed
    async fn login(&self, role: Role, command: LoginCommand) -> Result<LoginGrant, AuthError>;
}
