//! The fixed package list and command-line selection.
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Token that selects every package.
pub const ALL_KEYWORD: &str = "all";

/// A stow package: a top-level directory mirroring part of `$HOME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Package {
    /// Bash startup files.
    Bash,
    /// Zsh startup files.
    Zsh,
    /// Git configuration.
    Git,
    /// Vim configuration.
    Vim,
    /// Neovim configuration.
    Nvim,
    /// VS Code user settings.
    Code,
    /// AI assistant skills and prompts.
    Claude,
}

impl Package {
    /// Every package, in installation order.
    pub const ALL: [Self; 7] = [
        Self::Bash,
        Self::Zsh,
        Self::Git,
        Self::Vim,
        Self::Nvim,
        Self::Code,
        Self::Claude,
    ];

    /// Directory name of the package under the dotfiles root.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Git => "git",
            Self::Vim => "vim",
            Self::Nvim => "nvim",
            Self::Code => "code",
            Self::Claude => "claude",
        }
    }

    /// Whether the package directory exists under `root`.
    #[must_use]
    pub fn is_present(self, root: &Path) -> bool {
        root.join(self.as_str()).is_dir()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token names no known package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPackage(pub String);

impl fmt::Display for UnknownPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown package '{}'", self.0)
    }
}

impl std::error::Error for UnknownPackage {}

impl FromStr for Package {
    type Err = UnknownPackage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPackage(s.to_string()))
    }
}

/// One requested package after selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageRequest {
    /// A member of the fixed package list.
    Known(Package),
    /// A token that matches no package; kept for the warning.
    Unknown(String),
}

impl PackageRequest {
    /// Name as typed (or canonical name for known packages).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Known(p) => p.as_str(),
            Self::Unknown(name) => name,
        }
    }
}

/// Turn command-line tokens into the ordered list of package requests.
///
/// No tokens, or an `all` token anywhere, selects [`Package::ALL`]. Otherwise
/// tokens are kept in the order given, with repeats dropped.
#[must_use]
pub fn select<S: AsRef<str>>(tokens: &[S]) -> Vec<PackageRequest> {
    if tokens.is_empty() || tokens.iter().any(|t| t.as_ref() == ALL_KEYWORD) {
        return Package::ALL.into_iter().map(PackageRequest::Known).collect();
    }

    let mut requests: Vec<PackageRequest> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let request = token.as_ref().parse::<Package>().map_or_else(
            |UnknownPackage(name)| PackageRequest::Unknown(name),
            PackageRequest::Known,
        );
        if !requests.contains(&request) {
            requests.push(request);
        }
    }
    requests
}
