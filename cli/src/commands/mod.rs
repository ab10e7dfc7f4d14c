//! Top-level subcommand orchestration.
pub mod completions;
pub mod install;
pub mod list;
pub mod uninstall;
pub mod version;

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::GlobalOpts;
use crate::config::{self, Config, packages, settings};
use crate::error::{DotfilesError, PreflightError};
use crate::exec::{Executor, SystemExecutor};
use crate::logging::{Log, Logger};
use crate::resources::{STOW_PROGRAM, StowAction};
use crate::tasks::{self, Context};

/// Process-level dependencies handed to every command.
#[derive(Debug, Clone)]
pub struct Runtime {
    /// Executor used for `stow` and the `PATH` lookup.
    pub executor: Arc<dyn Executor>,
    /// Home directory, if the environment provides one.
    pub home: Option<PathBuf>,
    /// Logger shared by every task.
    pub log: Arc<Logger>,
}

impl Runtime {
    /// Runtime backed by real processes and the current environment.
    #[must_use]
    pub fn system(log: Arc<Logger>) -> Self {
        Self {
            executor: Arc::new(SystemExecutor),
            home: config::home_dir(),
            log,
        }
    }
}

/// Configuration resolved by the common command setup sequence.
#[derive(Debug)]
pub struct CommandSetup {
    /// Root, target, and stow options for this run.
    pub config: Config,
}

impl CommandSetup {
    /// Check preconditions and resolve configuration.
    ///
    /// Order matters: the `stow` lookup (when `require_stow`) happens before
    /// the root check, and both happen before any package is touched. A
    /// malformed settings file is only a warning.
    ///
    /// # Errors
    ///
    /// Returns [`PreflightError::ToolMissing`] or [`PreflightError::RootMissing`]
    /// when a precondition fails, or a [`ConfigError`](crate::error::ConfigError)
    /// when no home directory is available to derive defaults from.
    pub fn init(
        rt: &Runtime,
        global: &GlobalOpts,
        require_stow: bool,
    ) -> Result<Self, DotfilesError> {
        let log = &rt.log;

        if require_stow {
            let Some(path) = rt.executor.which(STOW_PROGRAM) else {
                return Err(PreflightError::ToolMissing {
                    program: STOW_PROGRAM.to_string(),
                }
                .into());
            };
            log.debug(&format!("using {}", path.display()));
        }

        let home = rt.home.as_deref();
        let root = config::resolve_root(global.root.as_deref(), home)?;
        if !root.is_dir() {
            return Err(PreflightError::RootMissing { path: root }.into());
        }
        log.debug(&format!("root: {}", root.display()));

        let settings = settings::load(&root).unwrap_or_else(|e| {
            log.warn(&format!("{e}; using default settings"));
            settings::Settings::default()
        });

        let target =
            config::resolve_target(global.target.as_deref(), &settings.stow, home, &root)?;
        log.debug(&format!("target: {}", target.display()));

        Ok(Self {
            config: Config {
                root,
                target,
                stow: settings.stow,
            },
        })
    }
}

/// Apply `action` to every selected package, then print the summary.
///
/// Per-package failures are reported but never turn into an error: the run
/// always completes once the preconditions hold.
///
/// # Errors
///
/// Returns an error if a precondition fails (see [`CommandSetup::init`]).
pub fn run_packages(
    rt: &Runtime,
    global: &GlobalOpts,
    tokens: &[String],
    action: StowAction,
) -> Result<(), DotfilesError> {
    let setup = CommandSetup::init(rt, global, true)?;
    rt.log.info(&format!(
        "dotfiles {}: {} → {}",
        version::version(),
        setup.config.root.display(),
        setup.config.target.display()
    ));

    let ctx = Context::new(
        setup.config,
        Arc::clone(&rt.log) as Arc<dyn Log>,
        global.dry_run,
        Arc::clone(&rt.executor),
    );

    let requests = packages::select(tokens);
    for task in tasks::package_tasks(&requests, action) {
        tasks::execute(task.as_ref(), &ctx);
    }

    rt.log.print_summary();

    let failed = rt.log.failure_count();
    if failed > 0 {
        rt.log
            .warn(&format!("{failed} package(s) failed to {}", action.label()));
    }
    Ok(())
}


#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::TaskStatus;
    use crate::resources::test_helpers::MockExecutor;
    use test_helpers::runtime;

    /// A home directory containing `dotfiles/<pkg>` for each package.
    fn home_with(packages: &[&str]) -> tempfile::TempDir {
        let home = tempfile::tempdir().unwrap();
        let root = home.path().join(config::DEFAULT_ROOT_DIR);
        std::fs::create_dir(&root).unwrap();
        for p in packages {
            std::fs::create_dir(root.join(p)).unwrap();
        }
        home
    }

    fn tokens(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn missing_stow_fails_before_any_package() {
        let home = home_with(&["bash"]);
        let (rt, exec) = runtime(MockExecutor::missing(), home.path());
        let err = run_packages(&rt, &GlobalOpts::default(), &[], StowAction::Restow).unwrap_err();
        assert!(matches!(
            err,
            DotfilesError::Preflight(PreflightError::ToolMissing { .. })
        ));
        assert!(exec.calls().is_empty());
        assert!(rt.log.task_entries().is_empty());
    }

    #[test]
    fn missing_stow_reported_even_when_root_missing() {
        let home = tempfile::tempdir().unwrap();
        let (rt, _) = runtime(MockExecutor::missing(), home.path());
        let err = CommandSetup::init(&rt, &GlobalOpts::default(), true).unwrap_err();
        assert!(matches!(
            err,
            DotfilesError::Preflight(PreflightError::ToolMissing { .. })
        ));
    }

    #[test]
    fn missing_root_fails_before_any_package() {
        let home = tempfile::tempdir().unwrap();
        let (rt, exec) = runtime(MockExecutor::found(), home.path());
        let err = run_packages(&rt, &GlobalOpts::default(), &[], StowAction::Restow).unwrap_err();
        assert!(matches!(
            err,
            DotfilesError::Preflight(PreflightError::RootMissing { .. })
        ));
        assert!(exec.calls().is_empty());
    }

    #[test]
    fn list_does_not_require_stow() {
        let home = home_with(&[]);
        let (rt, _) = runtime(MockExecutor::missing(), home.path());
        assert!(CommandSetup::init(&rt, &GlobalOpts::default(), false).is_ok());
    }

    #[test]
    fn no_args_processes_all_seven_in_order() {
        let all: Vec<&str> = config::Package::ALL.iter().map(|p| p.as_str()).collect();
        let home = home_with(&all);
        let (rt, exec) = runtime(MockExecutor::found(), home.path());
        run_packages(&rt, &GlobalOpts::default(), &[], StowAction::Restow).unwrap();
        assert_eq!(exec.packages(), all);
        let root = home.path().join("dotfiles");
        assert!(exec.calls().iter().all(|c| c.dir == root));
    }

    #[test]
    fn unknown_package_warns_and_continues() {
        let home = home_with(&["bash"]);
        let (rt, exec) = runtime(MockExecutor::found(), home.path());
        run_packages(
            &rt,
            &GlobalOpts::default(),
            &tokens(&["bash", "doesnotexist"]),
            StowAction::Restow,
        )
        .unwrap();
        assert_eq!(exec.packages(), vec!["bash"]);
        let entries = rt.log.task_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "doesnotexist");
        assert_eq!(entries[1].status, TaskStatus::Skipped);
    }

    #[test]
    fn stow_failure_is_not_fatal() {
        let home = home_with(&["bash", "zsh"]);
        let exec = MockExecutor::found().with_responses(vec![(false, "conflict")]);
        let (rt, exec) = runtime(exec, home.path());
        let result = run_packages(
            &rt,
            &GlobalOpts::default(),
            &tokens(&["bash", "zsh"]),
            StowAction::Restow,
        );
        assert!(result.is_ok(), "package failures must not fail the run");
        assert_eq!(exec.packages(), vec!["bash", "zsh"]);
        assert_eq!(rt.log.failure_count(), 1);
    }

    #[test]
    fn target_flag_overrides_settings_and_home() {
        let home = home_with(&["git"]);
        std::fs::write(
            home.path().join("dotfiles").join(settings::SETTINGS_FILE),
            "[stow]\ntarget = \"/from/settings\"\nno_folding = true\n",
        )
        .unwrap();
        let (rt, exec) = runtime(MockExecutor::found(), home.path());
        let global = GlobalOpts {
            target: Some(PathBuf::from("/from/cli")),
            ..GlobalOpts::default()
        };
        run_packages(&rt, &global, &tokens(&["git"]), StowAction::Restow).unwrap();
        let calls = exec.calls();
        let args = &calls[0].args;
        assert!(args.contains(&"--target=/from/cli".to_string()));
        assert!(args.contains(&"--no-folding".to_string()));
    }

    #[test]
    fn invalid_settings_fall_back_to_defaults() {
        let home = home_with(&["vim"]);
        std::fs::write(
            home.path().join("dotfiles").join(settings::SETTINGS_FILE),
            "[stow]\nbogus = 1\n",
        )
        .unwrap();
        let (rt, exec) = runtime(MockExecutor::found(), home.path());
        run_packages(&rt, &GlobalOpts::default(), &tokens(&["vim"]), StowAction::Restow).unwrap();
        let expected = format!("--target={}", home.path().display());
        assert!(exec.calls()[0].args.contains(&expected));
    }

    #[test]
    fn explicit_root_is_used() {
        let home = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("code")).unwrap();
        let (rt, exec) = runtime(MockExecutor::found(), home.path());
        let global = GlobalOpts {
            root: Some(root.path().to_path_buf()),
            ..GlobalOpts::default()
        };
        run_packages(&rt, &global, &tokens(&["code"]), StowAction::Delete).unwrap();
        let calls = exec.calls();
        assert_eq!(calls[0].dir, root.path());
        assert_eq!(calls[0].args[0], "--delete");
    }
}
