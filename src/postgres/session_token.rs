use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, PgPool};

use crate::config::TokenConfig;
use crate::crypto::hash_token;
use crate::{AuthError, SessionTokenRepository, TokenOwner};

use super::database_error;

#[derive(Clone)]
pub struct PostgresSessionTokenRepository {
    pool: PgPool,
    expiry: Duration,
}

impl PostgresSessionTokenRepository {
    /// Uses the default one hour validity window.
    pub fn new(pool: PgPool) -> Self {
        Self::with_config(pool, &TokenConfig::default())
    }

    pub fn with_config(pool: PgPool, config: &TokenConfig) -> Self {
        Self {
            pool,
            expiry: config.session_token_expiry,
        }
    }

    fn expiry_seconds(&self) -> f64 {
        self.expiry.num_milliseconds() as f64 / 1000.0
    }
}

#[derive(FromRow)]
struct OwnerRecord {
    customer_id: i64,
    expires_at: DateTime<Utc>,
}

#[async_trait]
impl SessionTokenRepository for PostgresSessionTokenRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, token), err))]
    async fn insert_token(&self, token: &str, customer_id: i64) -> Result<(), AuthError> {
        // issued_at and expires_at come from the database clock
        sqlx::query(
            r"INSERT INTO customer_tokens (token_hash, customer_id, issued_at, expires_at)
               VALUES ($1, $2, NOW(), NOW() + make_interval(secs => $3))",
        )
        .bind(hash_token(token))
        .bind(customer_id)
        .bind(self.expiry_seconds())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("insert_token", &e))?;

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, token), err))]
    async fn find_token_owner(&self, token: &str) -> Result<Option<TokenOwner>, AuthError> {
        let row: Option<OwnerRecord> = sqlx::query_as(
            "SELECT customer_id, expires_at FROM customer_tokens WHERE token_hash = $1",
        )
        .bind(hash_token(token))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("find_token_owner", &e))?;

        Ok(row.map(|r| TokenOwner {
            customer_id: r.customer_id,
            expires_at: r.expires_at,
        }))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn prune_expired(&self) -> Result<u64, AuthError> {
        let result = sqlx::query("DELETE FROM customer_tokens WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("prune_expired_tokens", &e))?;

        Ok(result.rows_affected())
    }
}
