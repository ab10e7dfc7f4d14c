//! Domain-specific error types for the installer.
//!
//! Internal modules return typed errors (e.g. [`PreflightError`],
//! [`ResourceError`]) while the binary converts them to [`anyhow::Error`] at
//! the command boundary via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! DotfilesError
//! ├── Preflight(PreflightError)  stow missing, root missing (fatal)
//! ├── Config(ConfigError)        settings file, home directory, path resolution
//! └── Resource(ResourceError)    a single stow invocation
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the installer.
#[derive(Error, Debug)]
pub enum DotfilesError {
    /// A run precondition does not hold.
    #[error(transparent)]
    Preflight(#[from] PreflightError),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A stow invocation failed.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),
}

/// Conditions checked before any package is touched.
///
/// Either one aborts the whole run with a non-zero exit status.
#[derive(Error, Debug)]
pub enum PreflightError {
    /// The symlink tool is not on `PATH`.
    #[error("'{program}' not found on PATH; install GNU Stow first")]
    ToolMissing {
        /// Program that was searched for.
        program: String,
    },

    /// The dotfiles root directory does not exist.
    #[error("dotfiles root not found: {}", path.display())]
    RootMissing {
        /// Root directory that was expected.
        path: PathBuf,
    },
}

/// Errors that arise while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `--root`/`--target` nor `HOME` provide a directory.
    #[error("HOME environment variable is not set; pass --{0} explicitly")]
    NoHome(&'static str),

    /// The settings file exists but could not be parsed.
    #[error("Invalid settings in {}: {message}", path.display())]
    InvalidSettings {
        /// Settings file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// A command-line path could not be made absolute.
    #[error("cannot resolve {}: {source}", path.display())]
    Unresolvable {
        /// Path as given, after `~` expansion.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O error occurred while reading the settings file.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise from a stow invocation.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Stow exited non-zero.
    #[error("stow {action} '{package}' failed (exit {code}): {stderr}")]
    StowFailed {
        /// Stow action that was attempted (`restow`, `delete`, ...).
        action: &'static str,
        /// Package being processed.
        package: String,
        /// Exit code, `-1` when terminated by a signal.
        code: i32,
        /// Trimmed standard error of the stow process.
        stderr: String,
    },
}
