//! Shared types used across all modules.
//!
//! Other modules import the contact record from here rather than reaching
//! into each other's internals.

pub mod user;

pub use user::User;

/// Field names of a persisted contact document.
pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const PHONE_NUMBER: &str = "phone_number";
    pub const ADDRESS: &str = "address";
}
