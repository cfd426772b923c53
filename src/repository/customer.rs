use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AuthError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// The columns needed to check a login: who it is and what to verify against.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerCredential {
    pub customer_id: i64,
    pub password_hash: String,
}

impl From<&Customer> for CustomerCredential {
    fn from(customer: &Customer) -> Self {
        CustomerCredential {
            customer_id: customer.id,
            password_hash: customer.password_hash.clone(),
        }
    }
}

#[cfg(any(test, feature = "mocks"))]
impl Customer {
    pub fn mock() -> Self {
        Customer {
            id: 1,
            name: "Test Customer".to_owned(),
            phone: "5550000".to_owned(),
            password_hash: "fakehashedpassword".to_owned(),
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn mock_from_credentials(id: i64, phone: &str, password_hash: &str) -> Self {
        Customer {
            id,
            phone: phone.to_owned(),
            password_hash: password_hash.to_owned(),
            ..Self::mock()
        }
    }
}

/// Storage for customer records.
///
/// Lookups return `Ok(None)` when no row matches; `Err` is reserved for
/// backend failures and is always `AuthError::Internal`.
#[async_trait]
pub trait CustomerRepository {
    async fn find_customer_credential(
        &self,
        phone: &str,
    ) -> Result<Option<CustomerCredential>, AuthError>;
    async fn all_customers(&self) -> Result<Vec<Customer>, AuthError>;
    async fn active_customers(&self) -> Result<Vec<Customer>, AuthError>;
    async fn find_customer_by_id(&self, id: i64) -> Result<Option<Customer>, AuthError>;
    async fn set_customer_active(
        &self,
        id: i64,
        active: bool,
    ) -> Result<Option<Customer>, AuthError>;
    /// Deletes the customer and returns the row as it was.
    async fn delete_customer(&self, id: i64) -> Result<Option<Customer>, AuthError>;
    async fn create_customer(
        &self,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Customer, AuthError>;
    async fn update_customer(
        &self,
        id: i64,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Option<Customer>, AuthError>;
}
