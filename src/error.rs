//! Domain-specific error types for the overlay linker.
//!
//! Structured error hierarchy using [`thiserror`]. Internal modules return
//! typed errors ([`ConfigError`], [`EntryError`], [`RegistryError`]) while
//! command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that arise from home-directory configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No home directory was supplied and none could be resolved from the
    /// environment.
    #[error("home directory is not set: pass --home or set HOME")]
    HomeNotSet,

    /// The supplied home directory is not an absolute path.
    #[error("home directory must be an absolute path: {0}")]
    HomeNotAbsolute(PathBuf),
}

/// Errors that arise from constructing a single entry.
#[derive(Error, Debug)]
pub enum EntryError {
    /// The overlay source path is not absolute.
    #[error("entry source must be an absolute path: {0}")]
    RelativeSource(PathBuf),

    /// The link target path is not absolute.
    #[error("entry target must be an absolute path: {0}")]
    RelativeTarget(PathBuf),
}

/// Errors that arise while building the registry from an overlay walk.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Two walked files normalized to the same relative name.
    ///
    /// Impossible under a true filesystem walk, but asserted so a broken
    /// walk never silently shadows an entry.
    #[error("duplicate entry name '{0}' in overlay")]
    DuplicateEntry(String),

    /// An entry record could not be constructed.
    #[error(transparent)]
    Entry(#[from] EntryError),
}
