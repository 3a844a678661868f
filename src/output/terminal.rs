//! Terminal renderer: one styled block per contact.

use colored::Colorize;

use crate::models::User;
use crate::output::UserRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl UserRenderer for TerminalRenderer {
    fn render(&self, users: &[User]) -> String {
        if users.is_empty() {
            return format!("{}", "  No contacts.\n".dimmed());
        }

        let mut output = String::new();

        for user in users {
            output.push_str(&format!(" {}\n", user.full_name().bold()));
            if !user.phone_number.is_empty() {
                output.push_str(&format!("   {} {}\n", "☎".cyan(), user.phone_number));
            }
            if !user.address.is_empty() {
                output.push_str(&format!("   {} {}\n", "⌂".cyan(), user.address));
            }
            output.push('\n');
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} {}\n",
            users.len().to_string().bold(),
            if users.len() == 1 { "contact" } else { "contacts" },
        ));

        output
    }
}
