//! The `unlink` subcommand.
use anyhow::Result;

use crate::cli::{EntryOpts, GlobalOpts};
use crate::logging::Logger;

/// Run the unlink command for the named entry.
///
/// An unknown or not-linked entry is reported and the process exits
/// normally; filesystem failures are fatal.
///
/// # Errors
///
/// Returns an error if setup or the unlink transition fails.
pub fn run(global: &GlobalOpts, opts: &EntryOpts, log: &Logger) -> Result<()> {
    let registry = super::setup(global, log)?;
    registry.unlink(&opts.name, log)
}
