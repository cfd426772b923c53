//! Customer identity records and bearer session tokens.
//!
//! `clientele` verifies a customer's phone/password pair against a stored
//! Argon2 hash, mints a 256-byte random session token, persists it with an
//! expiry boundary, and later resolves a presented token back to its customer.
//!
//! Storage is abstracted behind [`CustomerRepository`] and
//! [`SessionTokenRepository`]. Enable `sqlx_postgres` or `sqlx_sqlite` for the
//! bundled backends, or `mocks` for in-memory implementations.
//!
//! ```rust,ignore
//! use clientele::actions::{AuthenticateAction, IssueTokenAction};
//! use clientele::sqlite::{SqliteCustomerRepository, SqliteSessionTokenRepository};
//!
//! let issue = IssueTokenAction::new(customers.clone(), tokens.clone());
//! let token = issue.execute("5551234", "secret").await?;
//!
//! let authenticate = AuthenticateAction::new(tokens);
//! let customer_id = authenticate.execute(token.expose_secret()).await?;
//! ```

use std::fmt;

pub mod actions;
pub mod config;
pub mod crypto;
#[cfg(feature = "sqlx_postgres")]
pub mod postgres;
pub mod repository;
mod secret;
#[cfg(feature = "sqlx_sqlite")]
pub mod sqlite;

pub use config::{ClienteleConfig, PasswordConfig, TokenConfig};
pub use crypto::{Argon2Hasher, OsRandom, PasswordHasher, RandomSource};
pub use repository::{
    Customer, CustomerCredential, CustomerRepository, SessionTokenRepository, TokenOwner,
};
pub use secret::SecretString;

#[cfg(any(test, feature = "mocks"))]
pub use repository::{MockCustomerRepository, MockSessionTokenRepository};

/// Errors surfaced by every public operation.
///
/// The set is closed: backend failures are logged where they occur and then
/// collapse into [`AuthError::Internal`], so no variant carries schema or
/// driver details out of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// A referenced customer record does not exist.
    NotFound,
    /// No customer matches the phone, or no session matches the token.
    NoSuchUser,
    /// The password did not verify against the stored hash.
    InvalidPassword,
    /// The session token's expiry boundary has passed.
    ExpiredToken,
    /// Storage, randomness or hashing failure.
    Internal,
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotFound => write!(f, "item not found"),
            AuthError::NoSuchUser => write!(f, "no such user"),
            AuthError::InvalidPassword => write!(f, "invalid password"),
            AuthError::ExpiredToken => write!(f, "token expired"),
            AuthError::Internal => write!(f, "internal error"),
        }
    }
}
