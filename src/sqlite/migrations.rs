//! Database migrations for `SQLite`.
//!
//! ```rust,ignore
//! use clientele::sqlite::migrations;
//!
//! migrations::run(&pool).await?;
//! ```

use sqlx::{Executor, SqlitePool};

const MIGRATIONS: &[(&str, &str)] = &[
    (
        "20241220000001_create_customers_table",
        include_str!("../../migrations_sqlite/20241220000001_create_customers_table.sql"),
    ),
    (
        "20241220000002_create_customer_tokens_table",
        include_str!("../../migrations_sqlite/20241220000002_create_customer_tokens_table.sql"),
    ),
];

/// Runs every migration not yet recorded in `_clientele_migrations`.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    pool.execute(
        r"
        CREATE TABLE IF NOT EXISTS _clientele_migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        ",
    )
    .await?;

    for (name, sql) in MIGRATIONS {
        let applied: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _clientele_migrations WHERE name = ?)")
                .bind(*name)
                .fetch_one(pool)
                .await?;

        if applied {
            continue;
        }

        // statements are split on ';', so migration files must not put one
        // inside a string literal
        for statement in sql.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                pool.execute(trimmed).await?;
            }
        }

        sqlx::query("INSERT INTO _clientele_migrations (name) VALUES (?)")
            .bind(*name)
            .execute(pool)
            .await?;
    }

    Ok(())
}
