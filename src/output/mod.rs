//! Output renderers for the contact list: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::User;

/// Trait for rendering a list of contacts to an output format.
pub trait UserRenderer {
    /// Render contacts to a string.
    fn render(&self, users: &[User]) -> String;
}
