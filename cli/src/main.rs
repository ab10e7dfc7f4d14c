//! `dotfiles` binary: links dotfiles packages into `$HOME` with GNU Stow.
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use dotfiles_stow::cli::{Cli, Command, GlobalOpts};
use dotfiles_stow::commands::{self, Runtime};
use dotfiles_stow::logging::{self, Logger};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let verbose = args.verbose;
    let global = args.global.clone();

    let command = args.into_command();
    match &command {
        Command::Install(opts) => run_logged(&command, verbose, &global, |rt| {
            commands::install::run(rt, &global, opts).map_err(Into::into)
        }),
        Command::Uninstall(opts) => run_logged(&command, verbose, &global, |rt| {
            commands::uninstall::run(rt, &global, opts).map_err(Into::into)
        }),
        Command::List(opts) => run_logged(&command, verbose, &global, |rt| {
            commands::list::run(rt, &global, opts)
        }),
        Command::Version => {
            commands::version::run();
            ExitCode::SUCCESS
        }
        Command::Completions(opts) => {
            commands::completions::run(opts.shell);
            ExitCode::SUCCESS
        }
    }
}

/// Install the subscriber, run `body`, and turn a returned error into exit 1.
fn run_logged(
    command: &Command,
    verbose: bool,
    global: &GlobalOpts,
    body: impl FnOnce(&Runtime) -> anyhow::Result<()>,
) -> ExitCode {
    let name = command.log_name().unwrap_or("dotfiles");
    let requested = logging::log_destination(name, global.log, global.log_file.as_deref());
    let log_file = logging::init_subscriber(verbose, name, requested.as_deref());
    let log = Arc::new(Logger::new(log_file));
    let rt = Runtime::system(Arc::clone(&log));

    match body(&rt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
