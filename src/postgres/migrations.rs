//! Database migrations for PostgreSQL.
//!
//! ```rust,ignore
//! use clientele::postgres::migrations;
//!
//! migrations::run(&pool).await?;
//! ```

use sqlx::PgPool;

/// Runs the embedded migrations.
///
/// Creates the `customers` and `customer_tokens` tables. Applied versions are
/// tracked by sqlx in `_sqlx_migrations`.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
