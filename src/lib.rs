//! Dotfiles overlay symlink manager.
//!
//! Maintains symbolic links from a home directory into a version-controlled
//! overlay tree at `<home>/dotfiles/overlay`. Every regular file under the
//! overlay is one manageable entry; linking backs up any pre-existing
//! foreign object to a `.old` sibling, and unlinking restores it.
//!
//! The crate is organised bottom-up:
//!
//! - **[`entry`]** — one overlay file: status predicates and the
//!   link/unlink state transitions
//! - **[`registry`]** — overlay discovery and routing of named operations
//! - **[`commands`]** — top-level subcommand orchestration (`list`,
//!   `link`, `unlink`)
//!
//! All entry state is derived from the live filesystem on every run; no
//! sidecar metadata is written, which keeps the tool idempotent and
//! self-correcting after external interference.
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod registry;
