//! Package list, selection, and resolution of root, target, and settings.
pub mod packages;
pub mod settings;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub use packages::{Package, PackageRequest};
pub use settings::{Settings, StowOptions};

/// Default root directory name under `$HOME`.
pub const DEFAULT_ROOT_DIR: &str = "dotfiles";

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Dotfiles repository holding the package directories.
    pub root: PathBuf,
    /// Directory the packages are linked into.
    pub target: PathBuf,
    /// Extra stow options from the settings file.
    pub stow: StowOptions,
}

/// Return the user's home directory from the environment.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    let var = if cfg!(target_os = "windows") {
        std::env::var_os("USERPROFILE").or_else(|| std::env::var_os("HOME"))
    } else {
        std::env::var_os("HOME")
    };
    var.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Expand a leading `~` against `home`.
#[must_use]
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Expand `~` in a command-line path and anchor it at the working directory.
///
/// Stow runs from the root, so a relative path must not reach it as given.
fn from_command_line(path: &Path, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path, home);
    std::path::absolute(&expanded).map_err(|source| ConfigError::Unresolvable {
        path: expanded,
        source,
    })
}

/// Resolve the dotfiles root: `--root`, else `$HOME/dotfiles`.
///
/// A relative `--root` is taken from the current directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoHome`] when no root is given and `home` is unknown,
/// or [`ConfigError::Unresolvable`] when `--root` cannot be made absolute.
pub fn resolve_root(explicit: Option<&Path>, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(root) = explicit {
        return from_command_line(root, home);
    }
    home.map(|h| h.join(DEFAULT_ROOT_DIR))
        .ok_or(ConfigError::NoHome("root"))
}

/// Resolve the stow target: `--target`, else the settings `target`, else `$HOME`.
///
/// A relative `--target` is taken from the current directory. A relative
/// settings `target` is taken from `root`, where the settings file lives.
///
/// # Errors
///
/// Returns [`ConfigError::NoHome`] when nothing names a target and `home` is
/// unknown, or [`ConfigError::Unresolvable`] when `--target` cannot be made
/// absolute.
pub fn resolve_target(
    explicit: Option<&Path>,
    settings: &StowOptions,
    home: Option<&Path>,
    root: &Path,
) -> Result<PathBuf, ConfigError> {
    if let Some(target) = explicit {
        return from_command_line(target, home);
    }
    settings
        .target
        .as_deref()
        .map(|t| root.join(expand_tilde(t, home)))
        .or_else(|| home.map(Path::to_path_buf))
        .ok_or(ConfigError::NoHome("target"))
}
