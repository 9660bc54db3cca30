//! Overlay discovery and routing of named operations to entries.
use anyhow::{Context as _, Result};
use std::path::Path;

use crate::config::Config;
use crate::entry::{Entry, EntryChange};
use crate::error::RegistryError;
use crate::logging::Logger;

/// The set of manageable entries discovered under the overlay root.
///
/// Built fresh on every invocation by walking `<home>/dotfiles/overlay`
/// recursively; every regular file becomes one [`Entry`] named by its
/// forward-slash path relative to the overlay root. Nothing is persisted
/// between runs.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Walk the overlay tree and collect all entries.
    ///
    /// Directories within each level are visited in lexicographic file-name
    /// order so the discovery order is deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay directory cannot be read, or if two
    /// walked files normalize to the same relative name.
    pub fn build(config: &Config) -> Result<Self> {
        let mut entries = Vec::new();
        collect(config.overlay(), config.overlay(), config, &mut entries)?;
        Ok(Self { entries })
    }

    /// All entries in discovery order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Render one status line per entry, in discovery order. Pure read.
    #[must_use]
    pub fn status_lines(&self) -> Vec<String> {
        self.entries.iter().map(Entry::status_line).collect()
    }

    /// Link the named entry.
    ///
    /// An unknown name and an already-linked entry are reported through the
    /// logger and are not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry's filesystem transition fails.
    pub fn link(&self, name: &str, log: &Logger) -> Result<()> {
        let Some(entry) = self.find(name) else {
            log.error(&format!("unknown entry '{name}'"));
            return Ok(());
        };
        match entry.link()? {
            EntryChange::Applied => {
                log.debug(&format!(
                    "linked {} -> {}",
                    entry.target().display(),
                    entry.source().display()
                ));
            }
            EntryChange::AlreadyLinked => log.error(&format!("already linked: {name}")),
            EntryChange::NotLinked => {}
        }
        Ok(())
    }

    /// Unlink the named entry.
    ///
    /// An unknown name and a not-linked entry are reported through the
    /// logger and are not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry's filesystem transition fails.
    pub fn unlink(&self, name: &str, log: &Logger) -> Result<()> {
        let Some(entry) = self.find(name) else {
            log.error(&format!("unknown entry '{name}'"));
            return Ok(());
        };
        match entry.unlink()? {
            EntryChange::Applied => {
                log.debug(&format!("unlinked {}", entry.target().display()));
            }
            EntryChange::NotLinked => log.error(&format!("not linked: {name}")),
            EntryChange::AlreadyLinked => {}
        }
        Ok(())
    }
}

/// Recursively collect regular files under `dir` into `entries`.
fn collect(dir: &Path, root: &Path, config: &Config, entries: &mut Vec<Entry>) -> Result<()> {
    let mut dir_entries: Vec<std::fs::DirEntry> = std::fs::read_dir(dir)
        .with_context(|| format!("reading overlay directory {}", dir.display()))?
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("reading entry in {}", dir.display()))?;
    dir_entries.sort_by_key(std::fs::DirEntry::file_name);

    for dir_entry in dir_entries {
        let path = dir_entry.path();
        let file_type = dir_entry
            .file_type()
            .with_context(|| format!("reading file type of {}", path.display()))?;
        if file_type.is_dir() {
            collect(&path, root, config, entries)?;
        } else if file_type.is_file() {
            let name = relative_name(&path, root)?;
            if entries.iter().any(|e| e.name() == name) {
                return Err(RegistryError::DuplicateEntry(name).into());
            }
            let target = config.target_for(&name);
            entries.push(Entry::new(name, path, target).map_err(RegistryError::from)?);
        }
        // Anything else (symlinks, sockets, ...) is not a manageable entry.
    }
    Ok(())
}

/// Compute the forward-slash relative name of `path` under `root`.
fn relative_name(path: &Path, root: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("{} is outside the overlay root", path.display()))?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}
