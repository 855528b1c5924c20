//! Subscriber installation for the command line front end.

use std::error::Error;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// `directives` wins over `RUST_LOG`, which wins over `info`. When a global
/// subscriber is already installed, explicit `directives` cannot take effect
/// and are reported as an error; otherwise the existing subscriber is kept.
pub fn init(directives: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filter = match directives {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    match installed {
        Ok(()) => Ok(()),
        Err(err) if directives.is_some() => Err(err as Box<dyn Error>),
        Err(err) => {
            debug!(error = %err, "keeping the already installed subscriber");
            Ok(())
        }
    }
}
