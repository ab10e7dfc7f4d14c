//! GNU Stow invocation for one package.
use anyhow::Result;
use std::path::Path;

use super::{Applicable, ResourceChange};
use crate::config::{Package, StowOptions};
use crate::error::ResourceError;
use crate::exec::Executor;

/// Name of the GNU Stow executable.
pub const STOW_PROGRAM: &str = "stow";

/// Line stow prints on stderr whenever `--simulate` is passed.
const SIMULATION_NOTICE: &str = "WARNING: in simulation mode";

/// What stow is asked to do with a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StowAction {
    /// Remove then recreate the package's links.
    Restow,
    /// Remove the package's links.
    Delete,
}

impl StowAction {
    /// Stow command-line flag for this action.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Restow => "--restow",
            Self::Delete => "--delete",
        }
    }

    /// Short verb used in log messages and errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Restow => "restow",
            Self::Delete => "delete",
        }
    }
}

/// One package stowed from the dotfiles root into the target directory.
#[derive(Debug)]
pub struct StowResource<'a> {
    package: Package,
    root: &'a Path,
    target: &'a Path,
    options: &'a StowOptions,
    executor: &'a dyn Executor,
}

impl<'a> StowResource<'a> {
    /// Create a new stow resource.
    #[must_use]
    pub const fn new(
        package: Package,
        root: &'a Path,
        target: &'a Path,
        options: &'a StowOptions,
        executor: &'a dyn Executor,
    ) -> Self {
        Self {
            package,
            root,
            target,
            options,
            executor,
        }
    }

    /// Build the stow argument list for `action`.
    #[must_use]
    pub fn args(&self, action: StowAction, simulate: bool) -> Vec<String> {
        let mut args = vec![
            action.flag().to_string(),
            format!("--target={}", self.target.display()),
        ];
        if self.options.no_folding {
            args.push("--no-folding".to_string());
        }
        args.extend(self.options.ignore.iter().map(|re| format!("--ignore={re}")));
        if simulate {
            args.push("--simulate".to_string());
            args.push("--verbose".to_string());
        }
        args.push(self.package.as_str().to_string());
        args
    }

    /// Run stow from the dotfiles root, failing on a non-zero exit.
    ///
    /// Returns stow's stderr, where it writes its verbose report.
    fn stow(&self, action: StowAction, simulate: bool) -> Result<String> {
        let result = self
            .executor
            .run_in(self.root, STOW_PROGRAM, &self.args(action, simulate))?;
        if !result.success {
            return Err(ResourceError::StowFailed {
                action: action.label(),
                package: self.package.to_string(),
                code: result.code.unwrap_or(-1),
                stderr: result.stderr.trim().to_string(),
            }
            .into());
        }
        Ok(result.stderr)
    }

    /// Ask stow what `action` would do without touching the filesystem.
    ///
    /// Returns stow's verbose report, one action per line.
    ///
    /// # Errors
    ///
    /// Returns an error if stow cannot be run or reports a conflict.
    pub fn preview(&self, action: StowAction) -> Result<Vec<String>> {
        let report = self.stow(action, true)?;
        Ok(report
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with(SIMULATION_NOTICE))
            .map(String::from)
            .collect())
    }
}

impl Applicable for StowResource<'_> {
    fn description(&self) -> String {
        format!("{} → {}", self.package, self.target.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        self.stow(StowAction::Restow, false)?;
        Ok(ResourceChange::Applied)
    }

    fn remove(&self) -> Result<ResourceChange> {
        self.stow(StowAction::Delete, false)?;
        Ok(ResourceChange::Removed)
    }
}
