use crate::{AuthError, Customer, CustomerRepository};

pub struct GetCustomerAction<C: CustomerRepository> {
    customer_repository: C,
}

impl<C: CustomerRepository> GetCustomerAction<C> {
    pub fn new(customer_repository: C) -> Self {
        GetCustomerAction {
            customer_repository,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "get_customer", skip_all, err)
    )]
    pub async fn execute(&self, id: i64) -> Result<Customer, AuthError> {
        self.customer_repository
            .find_customer_by_id(id)
            .await?
            .ok_or(AuthError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockCustomerRepository;

    #[tokio::test]
    async fn test_get_customer_success() {
        let repo = MockCustomerRepository::with_customers(vec![Customer::mock_from_credentials(
            3, "5553333", "hash",
        )]);

        let action = GetCustomerAction::new(repo);
        let customer = action.execute(3).await.unwrap();
        assert_eq!(customer.phone, "5553333");
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let action = GetCustomerAction::new(MockCustomerRepository::new());
        assert_eq!(action.execute(999).await.unwrap_err(), AuthError::NotFound);
    }
}
