#![deny(missing_docs)]
#![doc = "Command line plumbing for syndrome circuit synthesis: config files, sweeps and logging."]

/// Subcommand implementations.
pub mod commands;
pub mod config;
pub mod logging;
pub mod sweep;

pub use config::{load_build_config, load_sweep_config, BuildConfig, SweepConfig};
pub use sweep::{run_sweep, SweepRecord};
