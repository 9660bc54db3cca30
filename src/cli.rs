//! Command-line surface.
use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the overlay symlink manager.
#[derive(Parser, Debug)]
#[command(name = "dotlink", about = "Dotfiles overlay symlink manager", version)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Override the home directory (defaults to $HOME)
    #[arg(long, global = true)]
    pub home: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the status of every overlay entry
    List,
    /// Link an entry into the home directory
    Link(EntryOpts),
    /// Unlink an entry, restoring any backup
    Unlink(EntryOpts),
}

/// Options for subcommands that act on a single named entry.
#[derive(Parser, Debug, Clone)]
pub struct EntryOpts {
    /// Entry name: the file's path relative to the overlay root
    pub name: String,
}
