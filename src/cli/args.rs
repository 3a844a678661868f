//! Clap argument types and output format selection.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use carnet::models::User;

/// Address book backed by a JSON document store.
#[derive(Parser, Debug)]
#[command(name = "carnet", version = carnet::constants::VERSION)]
pub struct Cli {
    /// Database file (overrides config and CARNET_DB).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Add a contact.
    Add(AddArgs),

    /// Remove a contact by name.
    Remove(NameArgs),

    /// Show a single contact.
    Show(NameArgs),

    /// List every contact.
    List(ListArgs),

    /// Validate contact fields without saving.
    Check(CheckArgs),

    /// Print the database file path.
    Path,

    /// Print version information.
    Version,
}

/// A contact's natural key.
#[derive(Parser, Debug)]
pub struct NameArgs {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

impl NameArgs {
    pub fn to_user(&self) -> User {
        User::new(&self.first_name, &self.last_name)
    }
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub name: NameArgs,

    /// Phone number, e.g. "06 68 50 00 36" or "+33 6 68 50 00 36".
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Postal address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// Validate phone number and names before saving.
    #[arg(long, default_value_t = false)]
    pub validate: bool,
}

impl AddArgs {
    pub fn to_user(&self) -> User {
        self.name
            .to_user()
            .with_phone_number(&self.phone)
            .with_address(&self.address)
    }
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub name: NameArgs,

    /// Phone number to validate.
    #[arg(long, default_value = "")]
    pub phone: String,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

/// Output format for contact listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render contacts using the renderer for this format.
    pub fn render(&self, users: &[User]) -> String {
        use carnet::output::UserRenderer;
        match self {
            OutputFormat::Terminal => carnet::output::terminal::TerminalRenderer.render(users),
            OutputFormat::Json => carnet::output::json::JsonRenderer.render(users),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_with_contact_fields() {
        let cli = Cli::parse_from([
            "carnet", "add", "Patrick", "Martin", "--phone", "0668500036", "--address",
            "1 rue du chemin, 75000 Paris", "--validate",
        ]);
        match cli.command {
            Command::Add(args) => {
                assert!(args.validate);
                assert_eq!(
                    args.to_user(),
                    User::with_contact("Patrick", "Martin", "0668500036", "1 rue du chemin, 75000 Paris")
                );
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn parse_add_defaults_optional_fields() {
        let cli = Cli::parse_from(["carnet", "add", "Adrien", "Klein"]);
        match cli.command {
            Command::Add(args) => {
                assert!(!args.validate);
                assert_eq!(args.to_user(), User::new("Adrien", "Klein"));
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn parse_global_db_after_subcommand() {
        let cli = Cli::parse_from(["carnet", "list", "--db", "/tmp/x.json", "--format", "json"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.json")));
        match cli.command {
            Command::List(args) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn remove_requires_both_names() {
        assert!(Cli::try_parse_from(["carnet", "remove", "Patrick"]).is_err());
    }

    #[test]
    fn json_format_renders_json() {
        let out = OutputFormat::Json.render(&[User::new("Adrien", "Klein")]);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["total"], 1);
    }
}
