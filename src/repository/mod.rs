//! Repository traits and data types.
//!
//! Implement these traits to back `clientele` with your own storage.
//!
//! | Trait | Description |
//! |-------|-------------|
//! | [`CustomerRepository`] | Customer records and credential lookup |
//! | [`SessionTokenRepository`] | Session token insert, lookup and pruning |
//!
//! Enable the `mocks` feature for in-memory implementations:
//! [`MockCustomerRepository`] and [`MockSessionTokenRepository`].

mod customer;
mod session_token;

#[cfg(any(test, feature = "mocks"))]
mod customer_mock;
#[cfg(any(test, feature = "mocks"))]
mod session_token_mock;

pub use customer::Customer;
pub use customer::CustomerCredential;
pub use customer::CustomerRepository;
pub use session_token::SessionToken;
pub use session_token::SessionTokenRepository;
pub use session_token::TokenOwner;

#[cfg(any(test, feature = "mocks"))]
pub use customer_mock::MockCustomerRepository;
#[cfg(any(test, feature = "mocks"))]
pub use session_token_mock::MockSessionTokenRepository;
