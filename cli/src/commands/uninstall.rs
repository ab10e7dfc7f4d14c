//! Uninstall command: delete the selected packages' links.
use crate::cli::{GlobalOpts, UninstallOpts};
use crate::error::DotfilesError;
use crate::resources::StowAction;

use super::Runtime;

/// Run the uninstall command.
///
/// # Errors
///
/// Returns an error only if `stow` or the dotfiles root is missing.
pub fn run(rt: &Runtime, global: &GlobalOpts, opts: &UninstallOpts) -> Result<(), DotfilesError> {
    super::run_packages(rt, global, &opts.packages, StowAction::Delete)
}
