//! List command: show each package and whether it exists under the root.
use serde::Serialize;
use std::path::Path;

use crate::cli::{GlobalOpts, ListOpts};
use crate::config::Package;

use super::{CommandSetup, Runtime};

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// Package name.
    pub name: &'static str,
    /// Whether the package directory exists.
    pub present: bool,
}

/// Collect presence information for every package under `root`.
#[must_use]
pub fn collect(root: &Path) -> Vec<PackageInfo> {
    Package::ALL
        .iter()
        .map(|p| PackageInfo {
            name: p.as_str(),
            present: p.is_present(root),
        })
        .collect()
}

/// Render the listing as aligned text.
#[must_use]
pub fn render_text(infos: &[PackageInfo]) -> String {
    infos
        .iter()
        .map(|i| {
            format!(
                "{:<8}{}\n",
                i.name,
                if i.present { "present" } else { "missing" }
            )
        })
        .collect()
}

/// Render the listing as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(infos: &[PackageInfo]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(infos)
}

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the dotfiles root is missing.
#[allow(clippy::print_stdout)]
pub fn run(rt: &Runtime, global: &GlobalOpts, opts: &ListOpts) -> anyhow::Result<()> {
    let setup = CommandSetup::init(rt, global, false)?;
    let infos = collect(&setup.config.root);
    if opts.json {
        println!("{}", render_json(&infos)?);
    } else {
        print!("{}", render_text(&infos));
    }
    Ok(())
}
