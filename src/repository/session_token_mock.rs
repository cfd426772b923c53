#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};

use crate::AuthError;
use crate::config::TokenConfig;
use crate::crypto::hash_token;

use super::session_token::{SessionToken, SessionTokenRepository, TokenOwner};

#[derive(Clone)]
pub struct MockSessionTokenRepository {
    pub tokens: Arc<Mutex<Vec<SessionToken>>>,
    expiry: Duration,
}

impl Default for MockSessionTokenRepository {
    fn default() -> Self {
        Self::with_config(&TokenConfig::default())
    }
}

impl MockSessionTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &TokenConfig) -> Self {
        Self {
            tokens: Arc::new(Mutex::new(vec![])),
            expiry: config.session_token_expiry,
        }
    }

    /// Moves the expiry boundary of the stored token matching `token`.
    ///
    /// Lets tests simulate the passage of time without sleeping.
    pub fn set_expires_at(&self, token: &str, expires_at: chrono::DateTime<Utc>) {
        let hashed = hash_token(token);
        let mut tokens = self.tokens.lock().unwrap();
        if let Some(t) = tokens.iter_mut().find(|t| t.token_hash == hashed) {
            t.expires_at = expires_at;
        }
    }
}

#[async_trait]
impl SessionTokenRepository for MockSessionTokenRepository {
    async fn insert_token(&self, token: &str, customer_id: i64) -> Result<(), AuthError> {
        let now = Utc::now();
        let Some(expires_at) = now.checked_add_signed(self.expiry) else {
            log::error!(
                target: "clientele",
                "msg=\"expiry out of range\", customer_id={customer_id}, expiry_secs={}",
                self.expiry.num_seconds()
            );
            return Err(AuthError::Internal);
        };
        let stored = SessionToken {
            token_hash: hash_token(token),
            customer_id,
            issued_at: now,
            expires_at,
        };

        let mut tokens = self.tokens.lock().unwrap();
        if tokens.iter().any(|t| t.token_hash == stored.token_hash) {
            return Err(AuthError::Internal);
        }
        tokens.push(stored);
        drop(tokens);

        Ok(())
    }

    async fn find_token_owner(&self, token: &str) -> Result<Option<TokenOwner>, AuthError> {
        let hashed = hash_token(token);
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens
            .iter()
            .find(|t| t.token_hash == hashed)
            .map(|t| TokenOwner {
                customer_id: t.customer_id,
                expires_at: t.expires_at,
            }))
    }

    async fn prune_expired(&self) -> Result<u64, AuthError> {
        let now = Utc::now();
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| t.expires_at > now);
        Ok((before - tokens.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unrepresentable_expiry_is_internal() {
        let repo = MockSessionTokenRepository::with_config(&TokenConfig {
            session_token_expiry: Duration::days(365 * 300_000),
        });

        assert_eq!(repo.insert_token("t", 1).await, Err(AuthError::Internal));
        assert!(repo.tokens.lock().unwrap().is_empty());
    }
}
