//! Redacting holder for passwords and issued session tokens.

use std::fmt;

use serde::Deserialize;

/// A password or bearer token that never prints its value.
///
/// `SaveCustomer` deserializes the submitted password straight into this
/// type, and `IssueTokenAction` hands the minted token back in it.
///
/// ```rust
/// use clientele::SecretString;
///
/// let token = SecretString::new("4f1c");
/// assert_eq!(format!("{token:?}"), "SecretString([REDACTED])");
/// assert_eq!(token.expose_secret(), "4f1c");
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw value, for the hasher or for the client receiving its token.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
