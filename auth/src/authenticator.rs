use thiserror::Error;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenIssuer;

/// Authentication errors surfaced by [`Authenticator::authenticate`].
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

/// Coordinates password verification and token issuance.
///
/// Holds the process-wide signing secret (read once at startup, never
/// mutated) and the fixed token lifetime.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl Authenticator {
    /// # Arguments
    /// * `jwt_secret` - Signing secret for issued tokens
    /// * `token_validity_hours` - Hours between issuance and expiry
    pub fn new(jwt_secret: &[u8], token_validity_hours: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(jwt_secret, token_validity_hours),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// False on mismatch or malformed hash material, never an error.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a role-scoped token.
    ///
    /// # Arguments
    /// * `password` - Submitted plaintext password
    /// * `stored_hash` - Hash on record for the account
    /// * `subject` - Account identifier for the `sub` claim
    /// * `role` - Role name for the `role` claim
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        role: &str,
    ) -> Result<String, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(subject, role)?)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// # Errors
    /// * `Expired` - Token lifetime window has closed
    /// * `Invalid` - Bad signature or malformed token
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_issuer.verify(token)
    }
}
