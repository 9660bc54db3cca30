//! One manageable overlay file: status predicates and link/unlink transitions.
use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::EntryError;

/// Suffix appended to a target path when a foreign object is backed up.
const BACKUP_SUFFIX: &str = ".old";

/// A single overlay file and its home-directory target.
///
/// Carries no state beyond the three paths; every predicate is a fresh
/// filesystem query so that external interference self-corrects on the
/// next invocation.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    source: PathBuf,
    target: PathBuf,
}

/// Result of a link or unlink operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryChange {
    /// The filesystem was changed to the requested state.
    Applied,
    /// `link` was requested but the target is already the correct symlink.
    AlreadyLinked,
    /// `unlink` was requested but the target is not the managed symlink.
    NotLinked,
}

/// Observable status of an entry, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStatus {
    /// The target is a symlink whose stored text equals the source path.
    pub linked: bool,
    /// A foreign object or a backup exists at or beside the target.
    pub obstructed: bool,
}

impl Entry {
    /// Create an entry record.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` or `target` is not an absolute path.
    pub fn new(name: String, source: PathBuf, target: PathBuf) -> Result<Self, EntryError> {
        if !source.is_absolute() {
            return Err(EntryError::RelativeSource(source));
        }
        if !target.is_absolute() {
            return Err(EntryError::RelativeTarget(target));
        }
        Ok(Self {
            name,
            source,
            target,
        })
    }

    /// The entry name: the source path relative to the overlay root,
    /// forward-slash separated.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the overlay source file.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Absolute path where the symlink is managed.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Sibling path used to park a foreign object: `<target>.old`.
    fn backup_path(&self) -> PathBuf {
        let mut os: OsString = self.target.clone().into_os_string();
        os.push(BACKUP_SUFFIX);
        PathBuf::from(os)
    }

    /// Whether the target is a symlink whose stored link text equals the
    /// source path exactly.
    ///
    /// The comparison is byte equality of the link text, never a resolved
    /// path comparison: a link that points to an equivalent but differently
    /// spelled path counts as foreign.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        std::fs::read_link(&self.target)
            .is_ok_and(|text| text.as_os_str() == self.source.as_os_str())
    }

    /// Whether something other than the correct symlink occupies the target.
    ///
    /// Checked without following the final symlink, so broken or
    /// wrong-pointing links count.
    #[must_use]
    pub fn has_foreign_object(&self) -> bool {
        self.target.symlink_metadata().is_ok() && !self.is_linked()
    }

    /// Whether a backup exists at `<target>.old`.
    #[must_use]
    pub fn has_backup(&self) -> bool {
        self.backup_path().symlink_metadata().is_ok()
    }

    /// Derive the current status from the filesystem.
    #[must_use]
    pub fn status(&self) -> EntryStatus {
        EntryStatus {
            linked: self.is_linked(),
            obstructed: self.has_foreign_object() || self.has_backup(),
        }
    }

    /// Render the one-line status marker: `{!| }{*| } {name}`.
    #[must_use]
    pub fn status_line(&self) -> String {
        let status = self.status();
        format!(
            "{}{} {}",
            if status.obstructed { '!' } else { ' ' },
            if status.linked { '*' } else { ' ' },
            self.name
        )
    }

    /// Link the entry: back up any foreign object to `<target>.old`, create
    /// missing parent directories, then create the symlink storing the
    /// literal source path.
    ///
    /// Returns [`EntryChange::AlreadyLinked`] without touching the
    /// filesystem when the correct link is already in place, so a repeated
    /// link never creates a second backup generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup rename, directory creation, or
    /// symlink creation fails.
    pub fn link(&self) -> Result<EntryChange> {
        if self.is_linked() {
            return Ok(EntryChange::AlreadyLinked);
        }
        if self.has_foreign_object() {
            let backup = self.backup_path();
            std::fs::rename(&self.target, &backup).with_context(|| {
                format!(
                    "back up {} to {}",
                    self.target.display(),
                    backup.display()
                )
            })?;
        }
        ensure_parent_dir(&self.target)?;
        create_symlink(&self.source, &self.target)
            .with_context(|| format!("create link: {}", self.target.display()))?;
        Ok(EntryChange::Applied)
    }

    /// Unlink the entry: remove the managed symlink, then restore the
    /// backup if one exists. Without a backup the target is left absent.
    ///
    /// Returns [`EntryChange::NotLinked`] without touching the filesystem
    /// (backup included) when the target is not the managed symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if the symlink removal or the restore rename fails.
    pub fn unlink(&self) -> Result<EntryChange> {
        if !self.is_linked() {
            return Ok(EntryChange::NotLinked);
        }
        std::fs::remove_file(&self.target)
            .with_context(|| format!("remove link: {}", self.target.display()))?;
        if self.has_backup() {
            let backup = self.backup_path();
            std::fs::rename(&backup, &self.target).with_context(|| {
                format!(
                    "restore {} to {}",
                    backup.display(),
                    self.target.display()
                )
            })?;
        }
        Ok(EntryChange::Applied)
    }
}

/// Ensure the parent directory of `path` exists, creating all missing
/// ancestors.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Create a symlink at `link` storing the literal `target` path as link text.
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }
    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_file(target, link)
    }
}
