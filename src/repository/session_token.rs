use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// A stored session token row.
///
/// `token_hash` is the SHA-256 of the bearer value; the value itself is only
/// ever held by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token_hash: String,
    pub customer_id: i64,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Who a token belongs to and when it stops being valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenOwner {
    pub customer_id: i64,
    pub expires_at: DateTime<Utc>,
}

impl TokenOwner {
    /// True once `now` has reached the expiry boundary.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Storage for session tokens.
///
/// The store stamps `issued_at` and `expires_at` itself on insert.
#[async_trait]
pub trait SessionTokenRepository {
    async fn insert_token(&self, token: &str, customer_id: i64) -> Result<(), AuthError>;
    async fn find_token_owner(&self, token: &str) -> Result<Option<TokenOwner>, AuthError>;
    /// Deletes every token whose expiry boundary has passed.
    async fn prune_expired(&self) -> Result<u64, AuthError>;
}
