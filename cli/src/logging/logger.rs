//! Logger that emits tracing events and collects package outcomes.
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{Log, TaskEntry, TaskStatus};

/// Forward each message-only [`Log`] method to the inherent one.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Per-status package counts for the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    /// Packages stowed.
    pub ok: usize,
    /// Packages skipped with a warning.
    pub skipped: usize,
    /// Packages simulated.
    pub dry_run: usize,
    /// Packages whose stow run failed.
    pub failed: usize,
}

impl SummaryCounts {
    /// Total number of recorded tasks.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.ok + self.skipped + self.dry_run + self.failed
    }

    const fn add(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Ok => self.ok += 1,
            TaskStatus::Skipped => self.skipped += 1,
            TaskStatus::DryRun => self.dry_run += 1,
            TaskStatus::Failed => self.failed += 1,
        }
    }
}

impl fmt::Display for SummaryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} packages: \x1b[32m{} ok\x1b[0m, \x1b[33m{} skipped\x1b[0m, \x1b[37m{} dry-run\x1b[0m, \x1b[31m{} failed\x1b[0m",
            self.total(),
            self.ok,
            self.skipped,
            self.dry_run,
            self.failed
        )
    }
}

/// Logger for one run.
///
/// Messages become [`tracing`] events routed by
/// [`init_subscriber`](super::subscriber::init_subscriber). The logger keeps
/// each package outcome and the log file path for the closing summary.
#[derive(Debug)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger that reports `log_file` in its summary.
    #[must_use]
    pub const fn new(log_file: Option<PathBuf>) -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            log_file,
        }
    }

    /// Log file opened for this run.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Snapshot of the recorded package outcomes, in order.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Report an error.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Report a warning.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Start a section, one per package plus the summary.
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Report progress.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Detail for the log file, and for the console with `--verbose`.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Report what a simulated stow run would change.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Remember a package outcome for the summary.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.tasks.lock() {
            guard.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count recorded tasks by status.
    #[must_use]
    pub fn counts(&self) -> SummaryCounts {
        let mut counts = SummaryCounts::default();
        for task in self.task_entries() {
            counts.add(task.status);
        }
        counts
    }

    /// Number of packages whose stow run failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.counts().failed
    }

    /// Print one line per package and the totals.
    ///
    /// Nothing is printed when no package was processed.
    pub fn print_summary(&self) {
        let tasks = self.task_entries();
        if tasks.is_empty() {
            return;
        }

        self.stage("Summary");
        for task in &tasks {
            self.info(&task.summary_line());
        }
        self.info(&self.counts().to_string());

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.record_task(name, status, message);
    }
}
