use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::config::TokenConfig;
use crate::crypto::hash_token;
use crate::{AuthError, SessionTokenRepository, TokenOwner};

use super::database_error;

/// SQLite session tokens.
///
/// Timestamps are stored as integer Unix milliseconds so that expiry
/// comparisons inside SQL are numeric rather than textual.
#[derive(Clone)]
pub struct SqliteSessionTokenRepository {
    pool: SqlitePool,
    expiry: Duration,
}

impl SqliteSessionTokenRepository {
    /// Uses the default one hour validity window.
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_config(pool, &TokenConfig::default())
    }

    pub fn with_config(pool: SqlitePool, config: &TokenConfig) -> Self {
        Self {
            pool,
            expiry: config.session_token_expiry,
        }
    }
}

#[derive(FromRow)]
struct OwnerRecord {
    customer_id: i64,
    expires_at: i64,
}

impl OwnerRecord {
    fn into_owner(self) -> Result<TokenOwner, AuthError> {
        let expires_at = DateTime::from_timestamp_millis(self.expires_at).ok_or_else(|| {
            log::error!(
                target: "clientele",
                "msg=\"corrupt expiry\", customer_id={}, expires_at={}",
                self.customer_id,
                self.expires_at
            );
            AuthError::Internal
        })?;

        Ok(TokenOwner {
            customer_id: self.customer_id,
            expires_at,
        })
    }
}

#[async_trait]
impl SessionTokenRepository for SqliteSessionTokenRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, token), err))]
    async fn insert_token(&self, token: &str, customer_id: i64) -> Result<(), AuthError> {
        let issued_at = Utc::now();
        let Some(expires_at) = issued_at.checked_add_signed(self.expiry) else {
            log::error!(
                target: "clientele",
                "msg=\"expiry out of range\", customer_id={customer_id}, expiry_secs={}",
                self.expiry.num_seconds()
            );
            return Err(AuthError::Internal);
        };

        sqlx::query(
            r"INSERT INTO customer_tokens (token_hash, customer_id, issued_at, expires_at)
               VALUES (?, ?, ?, ?)",
        )
        .bind(hash_token(token))
        .bind(customer_id)
        .bind(issued_at.timestamp_millis())
        .bind(expires_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("insert_token", &e))?;

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, token), err))]
    async fn find_token_owner(&self, token: &str) -> Result<Option<TokenOwner>, AuthError> {
        let row: Option<OwnerRecord> =
            sqlx::query_as("SELECT customer_id, expires_at FROM customer_tokens WHERE token_hash = ?")
                .bind(hash_token(token))
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| database_error("find_token_owner", &e))?;

        row.map(OwnerRecord::into_owner).transpose()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn prune_expired(&self) -> Result<u64, AuthError> {
        let result = sqlx::query("DELETE FROM customer_tokens WHERE expires_at <= ?")
            .bind(Utc::now().timestamp_millis())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("prune_expired_tokens", &e))?;

        Ok(result.rows_affected())
    }
}
