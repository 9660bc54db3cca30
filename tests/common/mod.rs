// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed home directory with an overlay tree
// and a fluent builder so each integration test can set up an isolated
// environment without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dotlink_cli::cli::GlobalOpts;
use dotlink_cli::config::Config;
use dotlink_cli::registry::Registry;

/// An isolated home directory backed by a [`tempfile::TempDir`].
///
/// Contains a `dotfiles/overlay` tree as the overlay root. The directory is
/// automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory acting as the home directory.
    pub home: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new context with an empty overlay tree.
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp home dir");
        std::fs::create_dir_all(home.path().join("dotfiles/overlay"))
            .expect("create overlay dir");
        Self { home }
    }

    /// Path to the home directory.
    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    /// Path to the overlay root.
    pub fn overlay_path(&self) -> PathBuf {
        self.home.path().join("dotfiles/overlay")
    }

    /// The link target for an entry name.
    pub fn target(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// Global CLI options pointing at this home directory.
    pub fn global_opts(&self) -> GlobalOpts {
        GlobalOpts {
            home: Some(self.home.path().to_path_buf()),
        }
    }

    /// Build a registry over this home directory.
    pub fn registry(&self) -> Registry {
        let config =
            Config::new(self.home.path().to_path_buf()).expect("config from temp home");
        Registry::build(&config).expect("build registry")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context with an empty overlay.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Create an overlay file at `name` (relative to the overlay root) with
    /// `content`, creating intermediate directories as needed.
    pub fn with_overlay_file(self, name: &str, content: &str) -> Self {
        let path = self.ctx.overlay_path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create overlay parent");
        }
        std::fs::write(&path, content).expect("write overlay file");
        self
    }

    /// Create a pre-existing plain file at the home-directory target for
    /// `name`, simulating a foreign object.
    pub fn with_home_file(self, name: &str, content: &str) -> Self {
        let path = self.ctx.target(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create target parent");
        }
        std::fs::write(&path, content).expect("write home file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
