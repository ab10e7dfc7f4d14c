//! Shared state handed to every task.
use std::path::Path;
use std::sync::Arc;

use crate::config::{Config, Package};
use crate::exec::Executor;
use crate::logging::Log;
use crate::resources::StowResource;

/// Everything a package task needs: where to stow, how, and where to report.
pub struct Context {
    /// Resolved root, target, and stow options.
    pub config: Config,
    /// Sink for progress and package outcomes.
    pub log: Arc<dyn Log>,
    /// Pass `--simulate` instead of changing links.
    pub dry_run: bool,
    /// Runs `stow`.
    pub executor: Arc<dyn Executor>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("executor", &self.executor)
            .finish()
    }
}

impl Context {
    /// Bundle the resolved configuration with the run's collaborators.
    #[must_use]
    pub fn new(
        config: Config,
        log: Arc<dyn Log>,
        dry_run: bool,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            config,
            log,
            dry_run,
            executor,
        }
    }

    /// Dotfiles root; stow runs from here.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Directory packages are linked into.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.config.target
    }

    /// Stow resource for `package` bound to this context.
    #[must_use]
    pub fn stow_resource(&self, package: Package) -> StowResource<'_> {
        StowResource::new(
            package,
            &self.config.root,
            &self.config.target,
            &self.config.stow,
            self.executor.as_ref(),
        )
    }
}
