use thiserror::Error;

use crate::domain::staff::models::Role;

/// Errors for the login flow.
///
/// Unknown email and wrong password both surface as `InvalidCredentials`;
/// the two cases must stay outwardly indistinguishable.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No account directory registered for role {0}")]
    DirectoryUnavailable(Role),

    #[error("Token generation failed: {0}")]
    TokenGeneration(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
