// Shared helpers for integration tests.
//
// Each test gets an isolated home directory holding a `dotfiles/` root, a
// `bin/` directory with a fake `stow` script, and a cache directory for the
// log file. The real `dotfiles` binary is run against it with a scrubbed
// environment, and every stow invocation is appended to `stow.log` as
// `<cwd>|<args>`.
#![allow(dead_code, clippy::expect_used)]
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Fake stow: record the call, fail when the last argument equals `$STOW_FAIL`.
const FAKE_STOW: &str = r#"#!/bin/sh
printf '%s|%s\n' "$(pwd)" "$*" >> "$STOW_LOG"
for last; do :; done
if [ -n "$STOW_FAIL" ] && [ "$last" = "$STOW_FAIL" ]; then
    echo "conflict: existing target is not owned by stow: $last" >&2
    exit 1
fi
exit 0
"#;

/// An isolated home directory backed by a [`tempfile::TempDir`].
#[derive(Debug)]
pub struct IntegrationTestContext {
    tmp: tempfile::TempDir,
    home: PathBuf,
    stow_fail: Option<String>,
}

impl IntegrationTestContext {
    /// Create a home with an empty `dotfiles/` root and a fake `stow` on `PATH`.
    pub fn new() -> Self {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let home = std::fs::canonicalize(tmp.path()).expect("canonicalize temp dir");
        std::fs::create_dir(home.join("dotfiles")).expect("create root");
        std::fs::create_dir(home.join("bin")).expect("create bin dir");
        let stow = home.join("bin").join("stow");
        std::fs::write(&stow, FAKE_STOW).expect("write fake stow");
        std::fs::set_permissions(&stow, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake stow");
        Self {
            tmp,
            home,
            stow_fail: None,
        }
    }

    /// Create the named package directories under the root.
    pub fn with_packages(self, packages: &[&str]) -> Self {
        for p in packages {
            std::fs::create_dir_all(self.root().join(p)).expect("create package dir");
        }
        self
    }

    /// Make the fake stow fail for `package`.
    pub fn failing(mut self, package: &str) -> Self {
        self.stow_fail = Some(package.to_string());
        self
    }

    /// Remove the fake stow so it is no longer found on `PATH`.
    pub fn without_stow(self) -> Self {
        std::fs::remove_file(self.home.join("bin").join("stow")).expect("remove fake stow");
        self
    }

    /// Remove the dotfiles root.
    pub fn without_root(self) -> Self {
        std::fs::remove_dir_all(self.root()).expect("remove root");
        self
    }

    /// Write `dotfiles.toml` into the root.
    pub fn with_settings(self, content: &str) -> Self {
        std::fs::write(self.root().join("dotfiles.toml"), content).expect("write settings");
        self
    }

    /// Home directory used as `$HOME`.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Dotfiles root (`$HOME/dotfiles`).
    pub fn root(&self) -> PathBuf {
        self.home.join("dotfiles")
    }

    /// Run the `dotfiles` binary with `args` from the home directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_from(&self.home, args)
    }

    /// Run the `dotfiles` binary with `args` from `cwd`.
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dotfiles"));
        cmd.args(args)
            .current_dir(cwd)
            .env_clear()
            .env("HOME", &self.home)
            .env("PATH", self.home.join("bin"))
            .env("XDG_CACHE_HOME", self.cache_dir())
            .env("STOW_LOG", self.stow_log_path());
        if let Some(fail) = &self.stow_fail {
            cmd.env("STOW_FAIL", fail);
        }
        cmd.output().expect("run dotfiles binary")
    }

    fn stow_log_path(&self) -> PathBuf {
        self.tmp.path().join("stow.log")
    }

    /// Recorded stow calls with the root and home replaced by placeholders.
    pub fn stow_calls(&self) -> String {
        let raw = std::fs::read_to_string(self.stow_log_path()).unwrap_or_default();
        let root = self.root().display().to_string();
        let home = self.home.display().to_string();
        raw.replace(&root, "<root>").replace(&home, "<home>")
    }

    /// Packages stow was invoked for, in order.
    pub fn stowed_packages(&self) -> Vec<String> {
        self.stow_calls()
            .lines()
            .filter_map(|l| l.rsplit(' ').next())
            .map(String::from)
            .collect()
    }

    /// Cache directory the binary sees as `$XDG_CACHE_HOME`.
    pub fn cache_dir(&self) -> PathBuf {
        self.home.join("cache")
    }

    /// Contents of the default log file for `command`, empty if absent.
    pub fn log_file(&self, command: &str) -> String {
        std::fs::read_to_string(
            self.cache_dir()
                .join("dotfiles")
                .join(format!("{command}.log")),
        )
        .unwrap_or_default()
    }
}

/// Every package name in installation order.
pub const ALL_PACKAGES: [&str; 7] = ["bash", "zsh", "git", "vim", "nvim", "code", "claude"];

/// Captured stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Captured stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
