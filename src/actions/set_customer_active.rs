use crate::{AuthError, Customer, CustomerRepository};

/// Toggles a customer's `active` flag.
///
/// The flag is informational; it does not affect issued or future sessions.
pub struct SetCustomerActiveAction<C: CustomerRepository> {
    customer_repository: C,
}

impl<C: CustomerRepository> SetCustomerActiveAction<C> {
    pub fn new(customer_repository: C) -> Self {
        SetCustomerActiveAction {
            customer_repository,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "set_customer_active", skip(self), err)
    )]
    pub async fn execute(&self, id: i64, active: bool) -> Result<Customer, AuthError> {
        let customer = self
            .customer_repository
            .set_customer_active(id, active)
            .await?
            .ok_or(AuthError::NotFound)?;

        log::info!(
            target: "clientele",
            "msg=\"customer active changed\", customer_id={id}, active={active}"
        );

        Ok(customer)
    }
}
