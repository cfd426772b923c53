#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

use crate::AuthError;

use super::customer::{Customer, CustomerCredential, CustomerRepository};

#[derive(Clone, Default)]
pub struct MockCustomerRepository {
    pub customers: Arc<Mutex<Vec<Customer>>>,
}

impl MockCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository, e.g. with `Customer::mock_from_credentials`.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(Mutex::new(customers)),
        }
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepository {
    async fn find_customer_credential(
        &self,
        phone: &str,
    ) -> Result<Option<CustomerCredential>, AuthError> {
        let customers = self.customers.lock().unwrap();
        Ok(customers
            .iter()
            .find(|c| c.phone == phone)
            .map(CustomerCredential::from))
    }

    async fn all_customers(&self) -> Result<Vec<Customer>, AuthError> {
        Ok(self.customers.lock().unwrap().clone())
    }

    async fn active_customers(&self) -> Result<Vec<Customer>, AuthError> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().filter(|c| c.active).cloned().collect())
    }

    async fn find_customer_by_id(&self, id: i64) -> Result<Option<Customer>, AuthError> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn set_customer_active(
        &self,
        id: i64,
        active: bool,
    ) -> Result<Option<Customer>, AuthError> {
        let mut customers = self.customers.lock().unwrap();
        Ok(customers.iter_mut().find(|c| c.id == id).map(|c| {
            c.active = active;
            c.clone()
        }))
    }

    async fn delete_customer(&self, id: i64) -> Result<Option<Customer>, AuthError> {
        let mut customers = self.customers.lock().unwrap();
        let position = customers.iter().position(|c| c.id == id);
        Ok(position.map(|i| customers.remove(i)))
    }

    async fn create_customer(
        &self,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Customer, AuthError> {
        let mut customers = self.customers.lock().unwrap();
        let id = customers.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let customer = Customer {
            id,
            name: name.to_owned(),
            phone: phone.to_owned(),
            password_hash: password_hash.to_owned(),
            active: true,
            created_at: Utc::now(),
        };
        customers.push(customer.clone());
        drop(customers);

        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: i64,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Option<Customer>, AuthError> {
        let mut customers = self.customers.lock().unwrap();
        Ok(customers.iter_mut().find(|c| c.id == id).map(|c| {
            name.clone_into(&mut c.name);
            phone.clone_into(&mut c.phone);
            password_hash.clone_into(&mut c.password_hash);
            c.clone()
        }))
    }
}
