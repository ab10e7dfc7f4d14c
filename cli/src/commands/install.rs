//! Install command: restow the selected packages.
use crate::cli::{GlobalOpts, InstallOpts};
use crate::error::DotfilesError;
use crate::resources::StowAction;

use super::Runtime;

/// Run the install command.
///
/// # Errors
///
/// Returns an error only if `stow` or the dotfiles root is missing.
pub fn run(rt: &Runtime, global: &GlobalOpts, opts: &InstallOpts) -> Result<(), DotfilesError> {
    super::run_packages(rt, global, &opts.packages, StowAction::Restow)
}
