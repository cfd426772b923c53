use crate::crypto::{Argon2Hasher, OsRandom, PasswordHasher, RandomSource, generate_session_token};
use crate::{AuthError, CustomerRepository, SecretString, SessionTokenRepository};

/// Exchanges a phone/password pair for a fresh session token.
pub struct IssueTokenAction<C, T, H = Argon2Hasher, R = OsRandom>
where
    C: CustomerRepository,
    T: SessionTokenRepository,
    H: PasswordHasher,
    R: RandomSource,
{
    customer_repository: C,
    token_repository: T,
    hasher: H,
    random: R,
}

impl<C: CustomerRepository, T: SessionTokenRepository> IssueTokenAction<C, T> {
    /// Creates an action that verifies with Argon2 and draws from the OS CSPRNG.
    pub fn new(customer_repository: C, token_repository: T) -> Self {
        Self::with_parts(
            customer_repository,
            token_repository,
            Argon2Hasher::default(),
            OsRandom,
        )
    }
}

impl<C, T, H, R> IssueTokenAction<C, T, H, R>
where
    C: CustomerRepository,
    T: SessionTokenRepository,
    H: PasswordHasher,
    R: RandomSource,
{
    /// Creates an action with a custom hasher and random source.
    pub fn with_parts(customer_repository: C, token_repository: T, hasher: H, random: R) -> Self {
        IssueTokenAction {
            customer_repository,
            token_repository,
            hasher,
            random,
        }
    }

    /// Verifies the credentials and stores a new token for the customer.
    ///
    /// # Returns
    ///
    /// - `Ok(token)` - 512 lowercase hex characters
    /// - `Err(AuthError::NoSuchUser)` - no customer has this phone
    /// - `Err(AuthError::InvalidPassword)` - password did not verify
    /// - `Err(AuthError::Internal)` - storage or randomness failure
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "issue_token", skip_all, err)
    )]
    pub async fn execute(&self, phone: &str, password: &str) -> Result<SecretString, AuthError> {
        let Some(credential) = self
            .customer_repository
            .find_customer_credential(phone)
            .await
            .map_err(|_| AuthError::Internal)?
        else {
            log::info!(target: "clientele", "msg=\"token refused\", reason=\"no such user\"");
            return Err(AuthError::NoSuchUser);
        };

        let verified = self
            .hasher
            .verify(password, &credential.password_hash)
            .unwrap_or(false);
        if !verified {
            log::info!(
                target: "clientele",
                "msg=\"token refused\", reason=\"invalid password\", customer_id={}",
                credential.customer_id
            );
            return Err(AuthError::InvalidPassword);
        }

        let token = generate_session_token(&self.random)?;
        self.token_repository
            .insert_token(&token, credential.customer_id)
            .await
            .map_err(|_| AuthError::Internal)?;

        log::info!(
            target: "clientele",
            "msg=\"token issued\", customer_id={}",
            credential.customer_id
        );

        Ok(SecretString::new(token))
    }
}
