use chrono::Utc;

use crate::{AuthError, SessionTokenRepository};

/// Resolves a presented session token to the customer it was issued for.
pub struct AuthenticateAction<T: SessionTokenRepository> {
    token_repository: T,
}

impl<T: SessionTokenRepository> AuthenticateAction<T> {
    pub fn new(token_repository: T) -> Self {
        AuthenticateAction { token_repository }
    }

    /// Returns the owning customer id while the token is inside its validity
    /// window.
    ///
    /// An unknown token reports `NoSuchUser`, the same as an unknown phone at
    /// issuance. Validation is read-only and never extends the expiry.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "authenticate", skip_all, err)
    )]
    pub async fn execute(&self, token: &str) -> Result<i64, AuthError> {
        let owner = self
            .token_repository
            .find_token_owner(token)
            .await
            .map_err(|_| AuthError::Internal)?
            .ok_or(AuthError::NoSuchUser)?;

        if owner.is_expired_at(Utc::now()) {
            log::info!(
                target: "clientele",
                "msg=\"session rejected\", reason=\"expired\", customer_id={}",
                owner.customer_id
            );
            return Err(AuthError::ExpiredToken);
        }

        Ok(owner.customer_id)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::Duration;

    use super::*;
    use crate::{MockSessionTokenRepository, TokenOwner};

    struct UnreachableTokenStore;

    #[async_trait]
    impl SessionTokenRepository for UnreachableTokenStore {
        async fn insert_token(&self, _token: &str, _customer_id: i64) -> Result<(), AuthError> {
            Err(AuthError::Internal)
        }

        async fn find_token_owner(&self, _token: &str) -> Result<Option<TokenOwner>, AuthError> {
            Err(AuthError::NotFound)
        }

        async fn prune_expired(&self) -> Result<u64, AuthError> {
            Err(AuthError::Internal)
        }
    }

    #[tokio::test]
    async fn test_authenticate_valid_token() {
        let tokens = MockSessionTokenRepository::new();
        tokens.insert_token("abc", 9).await.unwrap();

        let action = AuthenticateAction::new(tokens);
        assert_eq!(action.execute("abc").await, Ok(9));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let action = AuthenticateAction::new(MockSessionTokenRepository::new());
        assert_eq!(action.execute("never-issued").await, Err(AuthError::NoSuchUser));
    }

    #[tokio::test]
    async fn test_authenticate_expired_token() {
        let tokens = MockSessionTokenRepository::new();
        tokens.insert_token("abc", 9).await.unwrap();
        tokens.set_expires_at("abc", Utc::now() - Duration::seconds(1));

        let action = AuthenticateAction::new(tokens);
        assert_eq!(action.execute("abc").await, Err(AuthError::ExpiredToken));
    }

    #[tokio::test]
    async fn test_authenticate_at_boundary_is_expired() {
        let tokens = MockSessionTokenRepository::new();
        tokens.insert_token("abc", 9).await.unwrap();
        // any instant already reached counts as at-or-after the boundary
        tokens.set_expires_at("abc", Utc::now());

        let action = AuthenticateAction::new(tokens);
        assert_eq!(action.execute("abc").await, Err(AuthError::ExpiredToken));
    }

    #[tokio::test]
    async fn test_authenticate_does_not_extend_expiry() {
        let tokens = MockSessionTokenRepository::new();
        tokens.insert_token("abc", 9).await.unwrap();
        let before = tokens.tokens.lock().unwrap()[0].expires_at;

        let action = AuthenticateAction::new(tokens.clone());
        action.execute("abc").await.unwrap();
        action.execute("abc").await.unwrap();

        assert_eq!(tokens.tokens.lock().unwrap()[0].expires_at, before);
    }

    #[tokio::test]
    async fn test_authenticate_lookup_failure_is_internal() {
        let action = AuthenticateAction::new(UnreachableTokenStore);
        assert_eq!(action.execute("abc").await, Err(AuthError::Internal));
    }
}
