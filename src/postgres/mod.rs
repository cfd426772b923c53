//! PostgreSQL backend.
//!
//! Enable the `sqlx_postgres` feature to use these implementations.

mod customer;
pub mod migrations;
mod session_token;

pub use customer::PostgresCustomerRepository;
pub use session_token::PostgresSessionTokenRepository;

use sqlx::PgPool;

use crate::AuthError;
use crate::config::TokenConfig;

/// Creates both repositories over one shared pool.
pub fn create_repositories(
    pool: PgPool,
    config: &TokenConfig,
) -> (PostgresCustomerRepository, PostgresSessionTokenRepository) {
    (
        PostgresCustomerRepository::new(pool.clone()),
        PostgresSessionTokenRepository::with_config(pool, config),
    )
}

/// Logs a driver error and collapses it into `AuthError::Internal`.
pub(crate) fn database_error(operation: &str, e: &sqlx::Error) -> AuthError {
    log::error!(target: "clientele", "msg=\"database error\", operation=\"{operation}\", error=\"{e}\"");
    AuthError::Internal
}
