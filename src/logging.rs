//! Logging setup
//!
//! The library only emits `tracing` events; applications that want them on
//! stderr can install the formatter below once at startup.

use crate::error::{Error, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Default filter directives
pub const DEFAULT_DIRECTIVES: &str = "info";

/// Install a global fmt subscriber filtered by `directives` (e.g.
/// `"gnews_rs=debug"`).
///
/// Returns `Ok(false)` if another subscriber was already installed.
pub fn init(directives: &str) -> Result<bool> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| Error::Config(format!("invalid log directives {:?}: {}", directives, e)))?;

    let installed = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();

    Ok(installed)
}
