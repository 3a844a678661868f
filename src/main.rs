//! carnet — address book CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use carnet::config;
use carnet::constants;
use carnet::contacts;
use carnet::env;
use carnet::models;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use cli::args::{AddArgs, CheckArgs, Cli, Command, ListArgs, NameArgs};
use config::Config;
use env::Env;
use models::User;

fn main() {
    cli::init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().ok();
    let mut config = Config::load(cwd.as_deref(), &Env::real())
        .context("failed to load configuration")?;

    // Layer 1: CLI flags
    if let Some(db) = cli.db {
        config.storage.path = Some(db);
    }
    tracing::debug!(db = %config.db_path().display(), table = %config.storage.table, "configuration loaded");

    match cli.command {
        Command::Add(args) => run_add(&config, args),
        Command::Remove(args) => run_remove(&config, args),
        Command::Show(args) => run_show(&config, args),
        Command::List(args) => run_list(&config, args),
        Command::Check(args) => run_check(args),
        Command::Path => {
            println!("{}", config.db_path().display());
            Ok(())
        }
        Command::Version => {
            println!("{} {}", constants::APP_NAME.bold(), constants::VERSION.green().bold());
            Ok(())
        }
    }
}

/// Save a new contact.
fn run_add(config: &Config, args: AddArgs) -> Result<()> {
    let user = args.to_user();
    let validate = args.validate || config.validation.on_save;
    let mut store = config.open_store();

    let id = user
        .save(&mut store, validate)
        .with_context(|| format!("failed to save {}", user.full_name()))?;

    if id == contacts::DUPLICATE {
        bail!("{} already exists", user.full_name());
    }

    tracing::info!(id, name = %user.full_name(), "contact saved");
    println!("  {} {} (id {id})", "✔".green().bold(), user.full_name().bold());
    Ok(())
}

/// Delete a contact by natural key.
fn run_remove(config: &Config, args: NameArgs) -> Result<()> {
    let user = args.to_user();
    let mut store = config.open_store();

    let removed = user
        .delete(&mut store)
        .with_context(|| format!("failed to remove {}", user.full_name()))?;

    if removed.is_empty() {
        bail!("no contact named {}", user.full_name());
    }

    tracing::info!(?removed, name = %user.full_name(), "contact removed");
    println!("  {} removed {}", "✔".green().bold(), user.full_name().bold());
    Ok(())
}

/// Print a single contact.
fn run_show(config: &Config, args: NameArgs) -> Result<()> {
    let store = config.open_store();
    let key = args.to_user();

    let Some(doc) = key.db_instance(&store).context("failed to read database")? else {
        bail!("no contact named {}", key.full_name());
    };
    let user = User::from_document(&doc).context("failed to read contact")?;
    println!("{user}");
    Ok(())
}

/// List every contact.
fn run_list(config: &Config, args: ListArgs) -> Result<()> {
    let store = config.open_store();
    let users = contacts::get_all_users(&store).context("failed to read contacts")?;
    print!("{}", args.format.render(&users));
    Ok(())
}

/// Validate fields without touching the database.
fn run_check(args: CheckArgs) -> Result<()> {
    let user = args.name.to_user().with_phone_number(&args.phone);
    match user.validate() {
        Ok(()) => {
            println!("  {} {}", "✔".green().bold(), user.full_name().bold());
            Ok(())
        }
        Err(e) => bail!("{} {}", "✖".red().bold(), e.to_string().red()),
    }
}
