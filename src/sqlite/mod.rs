//! `SQLite` backend.
//!
//! Enable the `sqlx_sqlite` feature to use these implementations.

mod customer;
pub mod migrations;
mod session_token;

pub use customer::SqliteCustomerRepository;
pub use session_token::SqliteSessionTokenRepository;

use sqlx::SqlitePool;

use crate::AuthError;
use crate::config::TokenConfig;

/// Creates both repositories over one shared pool.
pub fn create_repositories(
    pool: SqlitePool,
    config: &TokenConfig,
) -> (SqliteCustomerRepository, SqliteSessionTokenRepository) {
    (
        SqliteCustomerRepository::new(pool.clone()),
        SqliteSessionTokenRepository::with_config(pool, config),
    )
}

/// Logs a driver error and collapses it into `AuthError::Internal`.
pub(crate) fn database_error(operation: &str, e: &sqlx::Error) -> AuthError {
    log::error!(target: "clientele", "msg=\"database error\", operation=\"{operation}\", error=\"{e}\"");
    AuthError::Internal
}
