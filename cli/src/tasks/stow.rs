//! Per-package tasks: stow a known package, warn about an unknown one.
use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::config::Package;
use crate::resources::{Applicable as _, ResourceChange, StowAction};

/// Restow or delete a single package.
#[derive(Debug)]
pub struct StowPackage {
    package: Package,
    action: StowAction,
}

impl StowPackage {
    /// Create a task applying `action` to `package`.
    #[must_use]
    pub const fn new(package: Package, action: StowAction) -> Self {
        Self { package, action }
    }
}

impl Task for StowPackage {
    fn name(&self) -> &str {
        self.package.as_str()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if !self.package.is_present(ctx.root()) {
            ctx.log.warn(&format!(
                "skipping '{}': no such directory in {}",
                self.package,
                ctx.root().display()
            ));
            return Ok(TaskResult::Skipped("directory not found".to_string()));
        }

        let resource = ctx.stow_resource(self.package);

        if ctx.dry_run {
            let planned = resource.preview(self.action)?;
            if planned.is_empty() {
                ctx.log.dry_run(&format!(
                    "would {} {} (no changes)",
                    self.action.label(),
                    resource.description()
                ));
            }
            for line in &planned {
                ctx.log.dry_run(line);
            }
            return Ok(TaskResult::DryRun);
        }

        ctx.log.debug(&format!(
            "stow {}: {}",
            self.action.label(),
            resource.description()
        ));
        let change = match self.action {
            StowAction::Restow => resource.apply()?,
            StowAction::Delete => resource.remove()?,
        };
        let verb = match change {
            ResourceChange::Applied => "linked",
            ResourceChange::Removed => "unlinked",
        };
        ctx.log.info(&format!("{verb} {}", resource.description()));
        Ok(TaskResult::Ok)
    }
}

/// A requested name outside the package list; only warns.
#[derive(Debug)]
pub struct UnknownPackage {
    name: String,
}

impl UnknownPackage {
    /// Create a task for the unrecognised `name`.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self { name }
    }
}

impl Task for UnknownPackage {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let known: Vec<&str> = Package::ALL.iter().map(|p| p.as_str()).collect();
        ctx.log.warn(&format!(
            "skipping '{}': unknown package (known: {})",
            self.name,
            known.join(", ")
        ));
        Ok(TaskResult::Skipped("unknown package".to_string()))
    }
}
