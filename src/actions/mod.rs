mod authenticate;
mod delete_customer;
mod get_customer;
mod issue_token;
mod list_customers;
mod prune_expired;
mod save_customer;
mod set_customer_active;

pub use authenticate::AuthenticateAction;
pub use delete_customer::DeleteCustomerAction;
pub use get_customer::GetCustomerAction;
pub use issue_token::IssueTokenAction;
pub use list_customers::ListCustomersAction;
pub use prune_expired::PruneExpiredTokensAction;
pub use save_customer::{SaveCustomer, SaveCustomerAction};
pub use set_customer_active::SetCustomerActiveAction;
