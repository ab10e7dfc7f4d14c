//! Optional `dotfiles.toml` settings at the dotfiles root.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Settings file name, looked up in the dotfiles root.
pub const SETTINGS_FILE: &str = "dotfiles.toml";

/// Top-level settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Options forwarded to every stow invocation.
    pub stow: StowOptions,
}

/// The `[stow]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StowOptions {
    /// Link target; `$HOME` when unset. `~/` is expanded.
    pub target: Option<PathBuf>,
    /// Regexes passed to stow as `--ignore`.
    pub ignore: Vec<String>,
    /// Pass `--no-folding` so stow links files rather than directories.
    pub no_folding: bool,
}

/// Load settings from `root/dotfiles.toml`.
///
/// A missing file yields [`Settings::default`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(root: &Path) -> Result<Settings, ConfigError> {
    let path = root.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::InvalidSettings {
        path,
        message: e.message().to_string(),
    })
}
