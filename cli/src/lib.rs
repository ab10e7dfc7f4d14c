//! Dotfiles installer.
//!
//! Links the packages of a dotfiles repository (`bash`, `zsh`, `git`, `vim`,
//! `nvim`, `code`, `claude`) into `$HOME` by running GNU Stow once per
//! package.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: the package list, selection, and settings resolution
//! - **[`resources`]**: the stow resource (`restow`, `delete`, simulate)
//! - **[`tasks`]**: one named unit of work per requested package
//! - **[`commands`]**: top-level subcommand orchestration (`install`, `uninstall`, `list`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod resources;
pub mod tasks;
