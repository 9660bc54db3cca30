//! Home-directory configuration and overlay path convention.
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::error::ConfigError;

/// Fixed location of the overlay tree below the home directory.
const OVERLAY_SUBDIR: &str = "dotfiles/overlay";

/// Validated paths for one invocation: the home directory and the overlay
/// root derived from it.
///
/// The home directory is an explicit constructor argument rather than an
/// ambient environment read, so the "must be set" requirement is enforced
/// once, before any filesystem scan.
#[derive(Debug, Clone)]
pub struct Config {
    home: PathBuf,
    overlay: PathBuf,
}

impl Config {
    /// Create a configuration rooted at `home`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeNotAbsolute`] if `home` is a relative path.
    pub fn new(home: PathBuf) -> Result<Self, ConfigError> {
        if !home.is_absolute() {
            return Err(ConfigError::HomeNotAbsolute(home));
        }
        let overlay = home.join(OVERLAY_SUBDIR);
        Ok(Self { home, overlay })
    }

    /// Resolve the home directory from CLI arguments or the environment.
    ///
    /// Resolution order: `--home` flag, then `HOME` (`USERPROFILE` on
    /// Windows).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeNotSet`] if no home directory can be
    /// resolved, or [`ConfigError::HomeNotAbsolute`] if the resolved path
    /// is relative.
    pub fn resolve(global: &GlobalOpts) -> Result<Self, ConfigError> {
        if let Some(home) = &global.home {
            return Self::new(home.clone());
        }
        let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
        std::env::var_os(var).map_or_else(
            || Err(ConfigError::HomeNotSet),
            |home| Self::new(PathBuf::from(home)),
        )
    }

    /// The home directory.
    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The overlay root: `<home>/dotfiles/overlay`.
    #[must_use]
    pub fn overlay(&self) -> &Path {
        &self.overlay
    }

    /// The link target for an entry name: `<home>/<name>`.
    #[must_use]
    pub fn target_for(&self, name: &str) -> PathBuf {
        self.home.join(name)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn abs(s: &str) -> PathBuf {
        if cfg!(windows) {
            PathBuf::from(format!("C:{s}"))
        } else {
            PathBuf::from(s)
        }
    }

    #[test]
    fn new_accepts_absolute_home() {
        let config = Config::new(abs("/home/u")).unwrap();
        assert_eq!(config.home(), abs("/home/u"));
    }

    #[test]
    fn new_rejects_relative_home() {
        let err = Config::new(PathBuf::from("home/u")).unwrap_err();
        assert!(matches!(err, ConfigError::HomeNotAbsolute(_)));
    }

    #[test]
    fn overlay_follows_convention() {
        let config = Config::new(abs("/home/u")).unwrap();
        assert_eq!(config.overlay(), abs("/home/u").join("dotfiles/overlay"));
    }

    #[test]
    fn target_for_joins_name_under_home() {
        let config = Config::new(abs("/home/u")).unwrap();
        assert_eq!(config.target_for(".bashrc"), abs("/home/u").join(".bashrc"));
        assert_eq!(
            config.target_for(".config/git/config"),
            abs("/home/u").join(".config/git/config")
        );
    }

    #[test]
    fn resolve_prefers_explicit_home() {
        let global = GlobalOpts {
            home: Some(abs("/explicit")),
        };
        let config = Config::resolve(&global).unwrap();
        assert_eq!(config.home(), abs("/explicit"));
    }

    #[test]
    fn resolve_rejects_relative_explicit_home() {
        let global = GlobalOpts {
            home: Some(PathBuf::from("not/absolute")),
        };
        assert!(matches!(
            Config::resolve(&global),
            Err(ConfigError::HomeNotAbsolute(_))
        ));
    }
}
