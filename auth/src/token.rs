use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}

/// Claims carried by every issued token.
///
/// `sub` is the account identifier, `role` the authorization claim the
/// service checks routes against. Both are opaque to this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates signed bearer tokens.
///
/// Signs with HS512 over a process-wide secret loaded once at startup.
/// Token lifetime is fixed at issuance; expired tokens require a new
/// login, there is no refresh mechanism.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity_hours: i64,
}

impl TokenIssuer {
    const ALGORITHM: Algorithm = Algorithm::HS512;

    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `secret` - Signing secret; at least 64 bytes is recommended for HS512
    /// * `validity_hours` - Hours between issuance and expiry
    pub fn new(secret: &[u8], validity_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validity_hours,
        }
    }

    /// Issue a signed token asserting `subject` holds `role`.
    ///
    /// # Arguments
    /// * `subject` - Account identifier placed in the `sub` claim
    /// * `role` - Role name placed in the `role` claim
    ///
    /// # Returns
    /// Compact JWT string, expiring `validity_hours` from now
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.validity_hours)).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Self::ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token's signature and expiry, returning its claims.
    ///
    /// Expiry is checked with zero leeway: a token is rejected the moment
    /// its lifetime window closes.
    ///
    /// # Errors
    /// * `Expired` - The `exp` claim is in the past
    /// * `Invalid` - Bad signature, wrong algorithm, or malformed token
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Self::ALGORITHM);
        validation.leeway = 0;

        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_that_is_long_enough_for_hs512_signing!";

    #[test]
    fn test_issue_and_verify() {
        let issuer = TokenIssuer::new(SECRET, 5);

        let token = issuer.issue("account-1", "Director").expect("issue failed");
        assert!(!token.is_empty());

        let claims = issuer.verify(&token).expect("verify failed");
        assert_eq!(claims.sub, "account-1");
        assert_eq!(claims.role, "Director");
        assert_eq!(claims.exp - claims.iat, 5 * 60 * 60);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenIssuer::new(SECRET, 5);
        let other = TokenIssuer::new(b"a_completely_different_secret_of_comparable_len!", 5);

        let token = issuer.issue("account-1", "Admin").unwrap();

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_garbage_token() {
        let issuer = TokenIssuer::new(SECRET, 5);

        assert!(matches!(
            issuer.verify("not.a.token"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Negative validity puts exp in the past at issuance
        let issuer = TokenIssuer::new(SECRET, -1);

        let token = issuer.issue("account-1", "User").unwrap();

        assert!(matches!(issuer.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_token_still_valid_within_window() {
        let issuer = TokenIssuer::new(SECRET, 1);

        let token = issuer.issue("account-1", "User").unwrap();

        assert!(issuer.verify(&token).is_ok());
    }
}
