use argon2::{Algorithm, Argon2, Params, PasswordVerifier, Version};
use password_hash::{PasswordHash, PasswordHasher as ArgonPasswordHasher, SaltString};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::AuthError;
use crate::config::PasswordConfig;

/// Number of random bytes behind every session token.
///
/// Hex encoding doubles this, so issued tokens are 512 characters long.
pub const SESSION_TOKEN_BYTES: usize = 256;

/// Hashes customer passwords on save and checks them at token issuance.
///
/// ```rust
/// use clientele::crypto::{Argon2Hasher, PasswordHasher};
///
/// let hasher = Argon2Hasher::default();
/// let hash = hasher.hash("secret").unwrap();
/// assert!(hasher.verify("secret", &hash).unwrap());
/// assert!(!hasher.verify("wrong", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
    /// Produces a PHC string with a fresh salt.
    ///
    /// # Errors
    ///
    /// `AuthError::Internal` when the configured cost is rejected or hashing
    /// fails.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// `Ok(false)` on a mismatch.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidPassword` when the stored value is not a PHC string.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Argon2id with the cost taken from a [`PasswordConfig`].
///
/// The cost only applies to new hashes; verification reads the parameters
/// recorded in the stored hash.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    cost: PasswordConfig,
}

impl Argon2Hasher {
    #[must_use]
    pub fn with_cost(cost: PasswordConfig) -> Self {
        Self { cost }
    }

    fn argon2(&self) -> Result<Argon2<'static>, AuthError> {
        let params = Params::new(
            self.cost.memory_cost,
            self.cost.time_cost,
            self.cost.parallelism,
            None,
        )
        .map_err(|e| {
            log::error!(
                target: "clientele",
                "msg=\"rejected argon2 cost\", memory_cost={}, time_cost={}, parallelism={}, error=\"{e}\"",
                self.cost.memory_cost,
                self.cost.time_cost,
                self.cost.parallelism
            );
            AuthError::Internal
        })?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map(|phc| phc.to_string())
            .map_err(|e| {
                log::error!(target: "clientele", "msg=\"password hashing failed\", error=\"{e}\"");
                AuthError::Internal
            })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let stored = PasswordHash::new(hash).map_err(|_| AuthError::InvalidPassword)?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &stored)
            .is_ok())
    }
}

/// A source of cryptographically secure bytes.
///
/// `fill` reports how many bytes of `dest` it actually wrote. Callers must
/// treat anything short of `dest.len()` as a failure.
pub trait RandomSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if the source cannot produce bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<usize, AuthError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<usize, AuthError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            log::error!(target: "clientele", "msg=\"os random source failed\", error=\"{e}\"");
            AuthError::Internal
        })?;
        Ok(dest.len())
    }
}

/// Draws [`SESSION_TOKEN_BYTES`] from `source` and hex-encodes them.
///
/// A short fill aborts with `AuthError::Internal` rather than returning a
/// weaker token.
///
/// ```rust
/// use clientele::crypto::{OsRandom, generate_session_token};
///
/// let token = generate_session_token(&OsRandom).unwrap();
/// assert_eq!(token.len(), 512);
/// ```
pub fn generate_session_token<R: RandomSource + ?Sized>(source: &R) -> Result<String, AuthError> {
    let mut buffer = [0u8; SESSION_TOKEN_BYTES];
    let filled = source.fill(&mut buffer)?;
    if filled != buffer.len() {
        log::error!(
            target: "clientele",
            "msg=\"short random read\", requested={}, filled={filled}",
            buffer.len()
        );
        return Err(AuthError::Internal);
    }

    Ok(hex::encode(buffer))
}

/// Hashes a session token with SHA-256 for storage.
///
/// Tokens are high-entropy, so a fast deterministic digest is enough; the
/// lookup stays an exact match on the digest.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
