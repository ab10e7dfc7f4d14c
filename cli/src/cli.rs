//! Command-line surface.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point for the dotfiles installer.
///
/// Without a subcommand the positional packages are installed, so
/// `dotfiles bash zsh` is the same as `dotfiles install bash zsh`.
#[derive(Parser, Debug)]
#[command(
    name = "dotfiles",
    about = "Link dotfiles packages into $HOME with GNU Stow",
    version
)]
pub struct Cli {
    /// Subcommand; `install` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Packages to install when no subcommand is given.
    #[command(flatten)]
    pub install: InstallOpts,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalOpts,
}

impl Command {
    /// Name of the log file for commands that touch the dotfiles root.
    ///
    /// `None` for commands that only print and exit.
    #[must_use]
    pub const fn log_name(&self) -> Option<&'static str> {
        match self {
            Self::Install(_) => Some("install"),
            Self::Uninstall(_) => Some("uninstall"),
            Self::List(_) => Some("list"),
            Self::Version | Self::Completions(_) => None,
        }
    }
}

impl Cli {
    /// The subcommand to run, defaulting to `install` with the positional packages.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Install(self.install))
    }
}

/// Options shared across all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Simulate stow operations without changing anything
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Dotfiles root directory [default: $HOME/dotfiles]
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory to link packages into [default: $HOME]
    #[arg(long, global = true, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Write a log file to $XDG_CACHE_HOME/dotfiles/<command>.log
    #[arg(long, global = true)]
    pub log: bool,

    /// Write the log file to PATH instead (implies --log)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Link packages into the target (stow --restow)
    Install(InstallOpts),
    /// Remove package links from the target (stow --delete)
    Uninstall(UninstallOpts),
    /// List packages and whether their directories exist
    List(ListOpts),
    /// Print version information
    Version,
    /// Generate a shell completion script
    Completions(CompletionsOpts),
}

/// Options for the `install` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct InstallOpts {
    /// Packages to install, or `all` [default: all]
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,
}

/// Options for the `uninstall` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct UninstallOpts {
    /// Packages to uninstall, or `all` [default: all]
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<String>,
}

/// Options for the `list` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ListOpts {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Options for the `completions` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
