//! Configuration types.
//!
//! ```rust
//! use clientele::config::{ClienteleConfig, TokenConfig};
//! use chrono::Duration;
//!
//! let config = ClienteleConfig {
//!     tokens: TokenConfig {
//!         session_token_expiry: Duration::minutes(30),
//!     },
//!     ..Default::default()
//! };
//! let hasher = config.password.hasher();
//! ```

use chrono::Duration;

use crate::crypto::Argon2Hasher;

/// Top-level configuration for the session and password layers.
#[derive(Debug, Clone, Default)]
pub struct ClienteleConfig {
    pub tokens: TokenConfig,
    pub password: PasswordConfig,
}

impl ClienteleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Long-lived sessions and cheap hashing for local work and tests.
    pub fn development() -> Self {
        Self {
            tokens: TokenConfig {
                session_token_expiry: Duration::hours(24),
            },
            password: PasswordConfig {
                memory_cost: 8192,
                time_cost: 1,
                parallelism: 1,
            },
        }
    }

    /// Short sessions and OWASP Argon2 parameters.
    pub fn strict() -> Self {
        Self {
            tokens: TokenConfig {
                session_token_expiry: Duration::minutes(15),
            },
            password: PasswordConfig {
                memory_cost: 65536,
                time_cost: 3,
                parallelism: 4,
            },
        }
    }
}

/// Session token lifetime.
///
/// The stores apply this window when they insert a token; the issuer never
/// computes an expiry itself.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// How long a session token stays valid after issuance.
    ///
    /// Default: 1 hour
    pub session_token_expiry: Duration,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            session_token_expiry: Duration::hours(1),
        }
    }
}

/// Argon2id cost parameters for newly hashed passwords.
///
/// Existing hashes always verify with the parameters embedded in them.
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// Memory cost in KiB.
    ///
    /// Default: 19456 (19 MiB)
    pub memory_cost: u32,
    /// Default: 2
    pub time_cost: u32,
    /// Default: 1
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl PasswordConfig {
    pub fn hasher(&self) -> Argon2Hasher {
        Argon2Hasher::with_cost(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::PasswordHasher;

    #[test]
    fn test_default_config() {
        let config = ClienteleConfig::default();

        assert_eq!(config.tokens.session_token_expiry, Duration::hours(1));
        assert_eq!(config.password.memory_cost, 19456);
        assert_eq!(config.password.time_cost, 2);
        assert_eq!(config.password.parallelism, 1);
    }

    #[test]
    fn test_strict_config() {
        let config = ClienteleConfig::strict();

        assert_eq!(config.tokens.session_token_expiry, Duration::minutes(15));
        assert_eq!(config.password.memory_cost, 65536);
    }

    #[test]
    fn test_development_config() {
        let config = ClienteleConfig::development();

        assert_eq!(config.tokens.session_token_expiry, Duration::hours(24));
        assert_eq!(config.password.time_cost, 1);
    }

    #[test]
    fn test_password_config_builds_working_hasher() {
        let hasher = ClienteleConfig::development().password.hasher();
        let hash = hasher.hash("secret").unwrap();

        assert!(hash.contains("m=8192,t=1,p=1"));
        assert!(hasher.verify("secret", &hash).unwrap());
    }
}
