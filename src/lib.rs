//! carnet — address book record manager (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod contacts;
pub mod env;
pub mod models;
pub mod output;
pub mod store;
pub mod validation;

pub use contacts::{get_all_users, ContactError, DUPLICATE};
pub use models::User;
