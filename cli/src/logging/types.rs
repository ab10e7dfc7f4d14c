//! Per-package outcomes and the [`Log`] trait tasks write through.

/// Outcome of one package, kept for the closing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    /// Package name as requested.
    pub name: String,
    /// Final status.
    pub status: TaskStatus,
    /// Skip reason or error text.
    pub message: Option<String>,
}

impl TaskEntry {
    /// Coloured summary line, e.g. `✓ bash` or `○ vim (directory not found)`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        let (icon, colour) = self.status.marker();
        let suffix = self
            .message
            .as_ref()
            .map_or_else(String::new, |msg| format!(" ({msg})"));
        format!("{colour}{icon} {}{suffix}\x1b[0m", self.name)
    }
}

/// Status of a processed package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Stow ran and succeeded.
    Ok,
    /// Not processed: unknown name or no package directory.
    Skipped,
    /// Stow ran with `--simulate`; nothing changed.
    DryRun,
    /// Stow failed; later packages still ran.
    Failed,
}

impl TaskStatus {
    /// Summary icon and its ANSI colour.
    #[must_use]
    pub const fn marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Ok => ("✓", "\x1b[32m"),
            Self::Skipped => ("○", "\x1b[33m"),
            Self::DryRun => ("~", "\x1b[37m"),
            Self::Failed => ("✗", "\x1b[31m"),
        }
    }
}

/// Logging sink used by tasks.
///
/// Tasks hold an `Arc<dyn Log>` and never talk to the subscriber directly.
pub trait Log: Send + Sync {
    /// Log a stage header; one per package.
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (console only with `--verbose`).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log what a simulated stow run would do.
    fn dry_run(&self, msg: &str);
    /// Record a package outcome for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}
