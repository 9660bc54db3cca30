//! Top-level subcommand orchestration.
pub mod link;
pub mod list;
pub mod unlink;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::Config;
use crate::logging::Logger;
use crate::registry::Registry;

/// Resolve the home configuration and build the registry.
///
/// Shared setup sequence for every subcommand: home resolution happens
/// before any filesystem scan, so a missing home directory fails fast.
///
/// # Errors
///
/// Returns an error if the home directory cannot be resolved or the
/// overlay walk fails.
fn setup(global: &GlobalOpts, log: &Logger) -> Result<Registry> {
    let config = Config::resolve(global)?;
    log.debug(&format!("home: {}", config.home().display()));
    log.debug(&format!("overlay: {}", config.overlay().display()));

    let registry = Registry::build(&config)?;
    log.debug(&format!("discovered {} entries", registry.entries().len()));
    Ok(registry)
}
