//! The `list` subcommand.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Logger;

/// Run the list command: print one status line per entry in discovery order.
///
/// # Errors
///
/// Returns an error if the home directory cannot be resolved or the overlay
/// walk fails.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let registry = super::setup(global, log)?;
    for line in registry.status_lines() {
        println!("{line}");
    }
    Ok(())
}
