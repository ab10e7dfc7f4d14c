//! Log file location, timestamps, and plain-text rendering.
use std::path::{Path, PathBuf};

/// Directory created under the cache root.
const CACHE_DIR_NAME: &str = "dotfiles";

/// Position inside an escape sequence while scanning.
#[derive(Debug, Clone, Copy)]
enum Scan {
    Text,
    Escape,
    Sequence,
}

/// Remove terminal escape sequences so the log file stays plain text.
///
/// `ESC [` opens a control sequence that ends at its final character
/// (`@` through `~`). `ESC` followed by anything else drops both characters.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut state = Scan::Text;
    for c in s.chars() {
        state = match (state, c) {
            (Scan::Text, '\x1b') => Scan::Escape,
            (Scan::Text, c) => {
                out.push(c);
                Scan::Text
            }
            (Scan::Escape, '[') => Scan::Sequence,
            (Scan::Sequence, '@'..='~') | (Scan::Escape, _) => Scan::Text,
            (Scan::Sequence, _) => Scan::Sequence,
        };
    }
    out
}

/// Log directory: `$XDG_CACHE_HOME/dotfiles`, else `~/.cache/dotfiles`.
pub(super) fn cache_root(xdg_cache: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    xdg_cache
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| home.map(|h| h.join(".cache")))
        .map(|dir| dir.join(CACHE_DIR_NAME))
}

/// Default log file for `command` under [`cache_root`].
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    let xdg = std::env::var_os("XDG_CACHE_HOME").map(PathBuf::from);
    let dir = cache_root(xdg.as_deref(), crate::config::home_dir().as_deref())?;
    Some(dir.join(format!("{command}.log")))
}

/// Where the log file for `command` goes, if one was asked for.
///
/// An explicit path wins; `enabled` alone selects the cache location.
/// Without either no file is written.
#[must_use]
pub fn log_destination(command: &str, enabled: bool, explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if enabled => log_file_path(command),
        None => None,
    }
}

/// Timestamp precision used in the log file.
#[derive(Debug, Clone, Copy)]
pub(super) enum Stamp {
    /// `HH:MM:SS`, prefixed to every line.
    Time,
    /// `YYYY-MM-DD HH:MM:SS`, written in the run header.
    DateTime,
}

/// Current UTC time formatted as `stamp`.
pub(super) fn utc_now(stamp: Stamp) -> String {
    let format = match stamp {
        Stamp::Time => "%H:%M:%S",
        Stamp::DateTime => "%Y-%m-%d %H:%M:%S",
    };
    chrono::Utc::now().format(format).to_string()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_removes_colours() {
        assert_eq!(strip_ansi("\x1b[33mWARN\x1b[0m  skipping 'vim'"), "WARN  skipping 'vim'");
        assert_eq!(
            strip_ansi("\x1b[1;34m==>\x1b[0m \x1b[1mbash\x1b[0m"),
            "==> bash"
        );
        assert_eq!(strip_ansi("plain"), "plain");
    }

    #[test]
    fn strip_ansi_handles_other_csi_sequences() {
        assert_eq!(strip_ansi("\x1b[2Jlinked"), "linked");
        assert_eq!(strip_ansi("\x1b[Kunlinked"), "unlinked");
    }

    #[test]
    fn strip_ansi_drops_lone_escape() {
        assert_eq!(strip_ansi("a\x1b(b"), "ab");
        assert_eq!(strip_ansi("trailing\x1b"), "trailing");
    }

    #[test]
    fn cache_root_prefers_xdg() {
        let root = cache_root(Some(Path::new("/xdg")), Some(Path::new("/home/test")));
        assert_eq!(root, Some(PathBuf::from("/xdg/dotfiles")));
    }

    #[test]
    fn cache_root_falls_back_to_home() {
        let root = cache_root(Some(Path::new("")), Some(Path::new("/home/test")));
        assert_eq!(root, Some(PathBuf::from("/home/test/.cache/dotfiles")));
        assert_eq!(cache_root(None, None), None);
    }

    #[test]
    fn no_log_file_unless_asked() {
        assert_eq!(log_destination("install", false, None), None);
    }

    #[test]
    fn explicit_log_file_wins() {
        let path = Path::new("/tmp/run.log");
        assert_eq!(
            log_destination("uninstall", false, Some(path)),
            Some(path.to_path_buf())
        );
        assert_eq!(
            log_destination("uninstall", true, Some(path)),
            Some(path.to_path_buf())
        );
    }

    #[test]
    fn enabled_log_is_named_after_command() {
        if let Some(path) = log_destination("list", true, None) {
            assert!(path.ends_with("dotfiles/list.log"), "got {}", path.display());
        }
    }

    #[test]
    fn stamp_formats() {
        let time = utc_now(Stamp::Time);
        assert_eq!(time.len(), 8, "HH:MM:SS should be 8 chars");
        assert_eq!(&time[2..3], ":");

        let datetime = utc_now(Stamp::DateTime);
        assert_eq!(datetime.len(), 19, "YYYY-MM-DD HH:MM:SS should be 19 chars");
        assert_eq!(&datetime[4..5], "-");
        assert_eq!(&datetime[10..11], " ");
    }
}
