//! CLI command definitions and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// The filter comes from `CARNET_LOG` (e.g. `debug`, `carnet=trace`) and
/// defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(carnet::constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
