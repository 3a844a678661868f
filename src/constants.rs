//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and storage defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "carnet";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.carnet.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".carnet.toml";

/// Directory name under `~/.config/` and the data dir.
pub const CONFIG_DIR: &str = "carnet";

/// Database filename used when no path is configured.
pub const DB_FILENAME: &str = "db.json";

/// Table holding contact documents.
pub const DEFAULT_TABLE: &str = "_default";

/// Indentation width of the persisted JSON file.
pub const DEFAULT_INDENT: usize = 4;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_DB: &str = "CARNET_DB";
pub const ENV_TABLE: &str = "CARNET_TABLE";
pub const ENV_VALIDATE: &str = "CARNET_VALIDATE";
pub const ENV_LOG: &str = "CARNET_LOG";
