//! Resolved prompt text and diagnostic tokens.

use std::fmt::{self, Write as _};

use nix::errno::Errno;

/// Diagnostic tokens rendered in place of a fragment that failed to resolve.
pub mod token {
    pub const MALLOC: &str = "!MALLOC!";
    pub const TIME: &str = "!TIME!";
    pub const STRFTIME: &str = "!STRFTIME!";
    pub const NOHOSTNAMEMAX: &str = "!NOHOSTNAMEMAX!";
    pub const SYSCONF: &str = "!SYSCONF!";
    pub const GETHOSTNAME: &str = "!GETHOSTNAME!";
    pub const ISATTY: &str = "!ISATTY!";
    pub const TTYNAME: &str = "!TTYNAME!";
    pub const BASENAMER: &str = "!BASENAMER!";
    pub const NOPROC: &str = "!NOPROC!";
    pub const PROCPIDPATH: &str = "!PROCPIDPATH!";
    pub const NOGETPWRSIZEMAX: &str = "!NOGETPWRSIZEMAX!";
    pub const GETPWUIDR: &str = "!GETPWUIDR!";
    pub const USERNOTFOUND: &str = "!USERNOTFOUND!";
    pub const STRNDUP: &str = "!STRNDUP!";
    pub const GETCWD: &str = "!GETCWD!";
}

/// Longest errno name we expect (`ENOTRECOVERABLE`) plus the two `!`.
const NAMED_TOKEN_CAPACITY: usize = 20;

/// Text shown for a failed resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Static `!TOKEN!`.
    Token(&'static str),
    /// Allocated `!ENAME!` built from an errno.
    Named(String),
}

impl Diagnostic {
    pub fn as_str(&self) -> &str {
        match self {
            Diagnostic::Token(token) => token,
            Diagnostic::Named(name) => name,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Diagnostic::Named(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats an OS error code as a diagnostic.
///
/// Codes with a canonical name become an owned `!ENAME!` token. Unknown codes, and any
/// failure to allocate the token, fall back to the borrowed `default`.
pub fn format_error(default: &'static str, errno: Errno) -> Diagnostic {
    if errno == Errno::UnknownErrno {
        return Diagnostic::Token(default);
    }

    let mut named = String::new();
    if named.try_reserve_exact(NAMED_TOKEN_CAPACITY).is_err() {
        return Diagnostic::Token(default);
    }
    // Errno's Debug output is the symbolic constant name.
    if write!(named, "!{errno:?}!").is_err() {
        return Diagnostic::Token(default);
    }
    Diagnostic::Named(named)
}

/// One resolved element of the prompt.
///
/// The variant records ownership: `Borrowed` text lives for the whole process, `Owned`
/// text was allocated by the resolver, and a `Failed` fragment owns its text only when
/// the diagnostic is [`Diagnostic::Named`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Borrowed(&'static str),
    Owned(String),
    Failed(Diagnostic),
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Borrowed(text) => text,
            Fragment::Owned(text) => text,
            Fragment::Failed(diagnostic) => diagnostic.as_str(),
        }
    }

    /// Whether the fragment holds an allocation that is released when it is dropped.
    pub fn is_owned(&self) -> bool {
        match self {
            Fragment::Borrowed(_) => false,
            Fragment::Owned(_) => true,
            Fragment::Failed(diagnostic) => diagnostic.is_owned(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fragment::Failed(_))
    }

    pub(crate) fn token(token: &'static str) -> Self {
        Fragment::Failed(Diagnostic::Token(token))
    }

    pub(crate) fn error(default: &'static str, errno: Errno) -> Self {
        Fragment::Failed(format_error(default, errno))
    }

    /// Copies `text` into an exactly sized owned buffer, degrading to `fallback`.
    pub(crate) fn copied(text: &str, fallback: &'static str) -> Self {
        match try_copy(text) {
            Some(owned) => Fragment::Owned(owned),
            None => Fragment::token(fallback),
        }
    }
}

impl From<Diagnostic> for Fragment {
    fn from(diagnostic: Diagnostic) -> Self {
        Fragment::Failed(diagnostic)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allocation-checked copy of `text`.
pub(crate) fn try_copy(text: &str) -> Option<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(text.len()).ok()?;
    owned.push_str(text);
    Some(owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_errno() {
        let diagnostic = format_error(token::GETCWD, Errno::ENOENT);
        assert_eq!(diagnostic, Diagnostic::Named("!ENOENT!".to_string()));
        assert!(diagnostic.is_owned());
    }

    #[test]
    fn test_format_error_unknown_uses_default() {
        let diagnostic = format_error(token::SYSCONF, Errno::UnknownErrno);
        assert_eq!(diagnostic, Diagnostic::Token("!SYSCONF!"));
        assert!(!diagnostic.is_owned());
    }

    #[test]
    fn test_format_error_has_bang_shape() {
        for errno in [Errno::EACCES, Errno::ENOTTY, Errno::ENAMETOOLONG, Errno::ESRCH] {
            let text = format_error(token::TIME, errno).to_string();
            assert!(text.starts_with('!') && text.ends_with('!'), "{text}");
            assert!(text.len() <= NAMED_TOKEN_CAPACITY);
        }
    }

    #[test]
    fn test_fragment_ownership() {
        assert!(!Fragment::Borrowed("$").is_owned());
        assert!(Fragment::Owned("bob".into()).is_owned());
        assert!(!Fragment::token(token::NOPROC).is_owned());
        assert!(Fragment::error(token::GETCWD, Errno::EACCES).is_owned());
        assert!(!Fragment::error(token::GETCWD, Errno::UnknownErrno).is_owned());
    }

    #[test]
    fn test_fragment_copied() {
        let fragment = Fragment::copied("alice", token::STRNDUP);
        assert_eq!(fragment, Fragment::Owned("alice".to_string()));
        assert_eq!(fragment.as_str(), "alice");
        assert!(!fragment.is_failed());
    }

    #[test]
    fn test_failed_display() {
        let fragment = Fragment::token(token::NOHOSTNAMEMAX);
        assert!(fragment.is_failed());
        assert_eq!(fragment.to_string(), "!NOHOSTNAMEMAX!");
    }
}
