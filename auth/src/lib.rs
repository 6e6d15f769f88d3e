//! Authentication library for the staff management service.
//!
//! Provides the security primitives the service builds its login flows on:
//! - Password hashing and verification (Argon2id)
//! - Signed role-bearing JWT issuance and validation (HS512)
//! - An `Authenticator` coordinating both for credential checks
//!
//! The library knows nothing about staff entities; callers supply an opaque
//! subject identifier and a role name, and get back a time-limited token
//! carrying exactly those two claims. There is no refresh and no revocation:
//! an issued token stays valid until its expiry regardless of later account
//! changes.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", 5);
//! let token = issuer.issue("account-1", "Kadr").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.role, "Kadr");
//! ```
//!
//! ## Complete Login Check
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 5);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let token = auth.authenticate("password123", &hash, "account-1", "Admin").unwrap();
//!
//! // Downstream: validate token
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.sub, "account-1");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
