use crate::{AuthError, Customer, CustomerRepository};

pub struct ListCustomersAction<C: CustomerRepository> {
    customer_repository: C,
}

impl<C: CustomerRepository> ListCustomersAction<C> {
    pub fn new(customer_repository: C) -> Self {
        ListCustomersAction {
            customer_repository,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_customers", skip_all, err)
    )]
    pub async fn all(&self) -> Result<Vec<Customer>, AuthError> {
        self.customer_repository.all_customers().await
    }

    /// Only customers whose `active` flag is set.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_active_customers", skip_all, err)
    )]
    pub async fn active(&self) -> Result<Vec<Customer>, AuthError> {
        self.customer_repository.active_customers().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockCustomerRepository;

    #[tokio::test]
    async fn test_list_all_and_active() {
        let mut inactive = Customer::mock_from_credentials(2, "5552222", "hash");
        inactive.active = false;
        let repo = MockCustomerRepository::with_customers(vec![
            Customer::mock_from_credentials(1, "5551111", "hash"),
            inactive,
        ]);

        let action = ListCustomersAction::new(repo);

        let all = action.all().await.unwrap();
        assert_eq!(all.len(), 2);

        let active = action.active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 1);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let action = ListCustomersAction::new(MockCustomerRepository::new());
        assert!(action.all().await.unwrap().is_empty());
        assert!(action.active().await.unwrap().is_empty());
    }
}
