use crate::{AuthError, Customer, CustomerRepository};

pub struct DeleteCustomerAction<C: CustomerRepository> {
    customer_repository: C,
}

impl<C: CustomerRepository> DeleteCustomerAction<C> {
    pub fn new(customer_repository: C) -> Self {
        DeleteCustomerAction {
            customer_repository,
        }
    }

    /// Deletes the customer and returns the removed record.
    ///
    /// Session tokens already issued to the customer are left in place and
    /// run out at their own expiry.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_customer", skip_all, err)
    )]
    pub async fn execute(&self, id: i64) -> Result<Customer, AuthError> {
        let customer = self
            .customer_repository
            .delete_customer(id)
            .await?
            .ok_or(AuthError::NotFound)?;

        log::info!(
            target: "clientele",
            "msg=\"customer deleted\", customer_id={id}"
        );

        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockCustomerRepository, MockSessionTokenRepository, SessionTokenRepository};

    #[tokio::test]
    async fn test_delete_customer_success() {
        let repo = MockCustomerRepository::with_customers(vec![Customer::mock_from_credentials(
            4, "5554444", "hash",
        )]);

        let action = DeleteCustomerAction::new(repo.clone());
        let deleted = action.execute(4).await.unwrap();

        assert_eq!(deleted.id, 4);
        assert!(repo.customers.lock().unwrap().is_empty());
        assert_eq!(action.execute(4).await.unwrap_err(), AuthError::NotFound);
    }

    #[tokio::test]
    async fn test_delete_customer_keeps_tokens() {
        let repo = MockCustomerRepository::with_customers(vec![Customer::mock_from_credentials(
            4, "5554444", "hash",
        )]);
        let tokens = MockSessionTokenRepository::new();
        tokens.insert_token("abc", 4).await.unwrap();

        DeleteCustomerAction::new(repo).execute(4).await.unwrap();

        let owner = tokens.find_token_owner("abc").await.unwrap();
        assert_eq!(owner.map(|o| o.customer_id), Some(4));
    }
}
