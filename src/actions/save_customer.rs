use serde::Deserialize;

use crate::crypto::{Argon2Hasher, PasswordHasher};
use crate::{AuthError, Customer, CustomerRepository, SecretString};

/// Input for [`SaveCustomerAction`].
///
/// No `id` creates a customer; an `id` updates that customer.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveCustomer {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub password: SecretString,
}

/// Upserts a customer, hashing the plaintext password before it is stored.
pub struct SaveCustomerAction<C, H = Argon2Hasher>
where
    C: CustomerRepository,
    H: PasswordHasher,
{
    customer_repository: C,
    hasher: H,
}

impl<C: CustomerRepository> SaveCustomerAction<C, Argon2Hasher> {
    pub fn new(customer_repository: C) -> Self {
        Self::with_hasher(customer_repository, Argon2Hasher::default())
    }
}

impl<C: CustomerRepository, H: PasswordHasher> SaveCustomerAction<C, H> {
    pub fn with_hasher(customer_repository: C, hasher: H) -> Self {
        SaveCustomerAction {
            customer_repository,
            hasher,
        }
    }

    /// # Returns
    ///
    /// - `Ok(customer)` - the stored record
    /// - `Err(AuthError::NotFound)` - `id` was given but no such customer
    /// - `Err(AuthError::Internal)` - hashing or storage failure
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "save_customer", skip_all, err)
    )]
    pub async fn execute(&self, input: SaveCustomer) -> Result<Customer, AuthError> {
        let password_hash = self.hasher.hash(input.password.expose_secret())?;

        let customer = match input.id {
            None => {
                self.customer_repository
                    .create_customer(&input.name, &input.phone, &password_hash)
                    .await?
            }
            Some(id) => self
                .customer_repository
                .update_customer(id, &input.name, &input.phone, &password_hash)
                .await?
                .ok_or(AuthError::NotFound)?,
        };

        log::info!(
            target: "clientele",
            "msg=\"customer saved\", customer_id={}, created={}",
            customer.id,
            input.id.is_none()
        );

        Ok(customer)
    }
}
