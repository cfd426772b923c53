//! run periodically (e.g., from a scheduled task) so expired session rows do not pile up.

use crate::{AuthError, SessionTokenRepository};

pub struct PruneExpiredTokensAction<T: SessionTokenRepository> {
    token_repository: T,
}

impl<T: SessionTokenRepository> PruneExpiredTokensAction<T> {
    pub fn new(token_repository: T) -> Self {
        Self { token_repository }
    }

    /// Deletes expired session tokens and returns how many were removed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), name = "prune_expired")
    )]
    pub async fn execute(&self) -> Result<u64, AuthError> {
        let pruned = self.token_repository.prune_expired().await?;

        log::info!(
            target: "clientele",
            "msg=\"tokens pruned\", session_tokens={pruned}"
        );

        Ok(pruned)
    }
}
