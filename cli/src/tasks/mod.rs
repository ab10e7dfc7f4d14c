//! Named units of work, one per requested package.
mod context;
pub mod stow;

pub use context::Context;

use anyhow::Result;

use crate::config::PackageRequest;
use crate::logging::TaskStatus;
use crate::resources::StowAction;

/// Outcome of a package task that did not fail.
///
/// # Examples
///
/// ```
/// use dotfiles_stow::tasks::TaskResult;
///
/// let skipped = TaskResult::Skipped("directory not found".into());
/// assert!(matches!(skipped, TaskResult::Skipped(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    /// Stow ran and succeeded.
    Ok,
    /// Nothing ran; the reason goes into the summary.
    Skipped(String),
    /// Stow ran with `--simulate`.
    DryRun,
}

impl TaskResult {
    /// Summary status and detail text for this outcome.
    #[must_use]
    pub fn into_status(self) -> (TaskStatus, Option<String>) {
        match self {
            Self::Ok => (TaskStatus::Ok, None),
            Self::Skipped(reason) => (TaskStatus::Skipped, Some(reason)),
            Self::DryRun => (TaskStatus::DryRun, None),
        }
    }
}

/// Work for one requested package.
pub trait Task: Send + Sync {
    /// Package name, used as the stage header and summary label.
    fn name(&self) -> &str;

    /// Do the work against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails, such as when stow exits non-zero.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Build one task per request, in request order.
#[must_use]
pub fn package_tasks(requests: &[PackageRequest], action: StowAction) -> Vec<Box<dyn Task>> {
    requests
        .iter()
        .map(|request| -> Box<dyn Task> {
            match request {
                PackageRequest::Known(package) => Box::new(stow::StowPackage::new(*package, action)),
                PackageRequest::Unknown(name) => Box::new(stow::UnknownPackage::new(name.clone())),
            }
        })
        .collect()
}

/// Run one package task under its own stage header and record the outcome.
///
/// An error is logged and recorded as [`TaskStatus::Failed`]; it never
/// reaches the caller, so the next package still runs.
pub fn execute(task: &dyn Task, ctx: &Context) {
    let name = task.name();
    ctx.log.stage(name);

    let (status, detail) = match task.run(ctx) {
        Ok(result) => result.into_status(),
        Err(e) => {
            let detail = format!("{e:#}");
            ctx.log.error(&format!("{name}: {detail}"));
            (TaskStatus::Failed, Some(detail))
        }
    };
    ctx.log.record_task(name, status, detail.as_deref());
}
