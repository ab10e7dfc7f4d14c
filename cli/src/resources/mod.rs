//! Idempotent resource primitives driven by external tools.
pub mod stow;

use anyhow::Result;

pub use stow::{STOW_PROGRAM, StowAction, StowResource};

/// Minimal interface for resources that can be described, applied, and removed.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Apply the resource change.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tool cannot be run or reports failure.
    fn apply(&self) -> Result<ResourceChange>;

    /// Remove the resource, undoing a previous `apply()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tool cannot be run or reports failure.
    fn remove(&self) -> Result<ResourceChange>;
}

/// Result of applying a resource change.
///
/// # Examples
///
/// ```
/// use dotfiles_stow::resources::ResourceChange;
///
/// let applied = ResourceChange::Applied;
/// assert_ne!(applied, ResourceChange::Removed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Links were created or refreshed.
    Applied,
    /// Links were removed.
    Removed,
}
