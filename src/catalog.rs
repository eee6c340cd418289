//! Prompt element catalog types.
//!
//! A prompt is declared as a `const` slice of [`PromptElement`]s; see
//! [`crate::config::PROMPT`].

/// Tag selecting how a prompt element is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Any string literal; argument is the text.
    Literal,
    /// A single space.
    Space,
    /// ASCII bell (`\x07`), bash `\a`.
    Bell,
    /// Hostname up to the first dot, bash `\h`.
    HostnameShort,
    /// Full hostname, bash `\H`.
    HostnameFull,
    /// Basename of the terminal on stdout, e.g. `3` for `/dev/pts/3`.
    TtyBasename,
    /// Executable path of the parent process (usually the shell).
    ParentProcess,
    /// Date, `Tue May 26`.
    WeekdayDate,
    /// Date/time with a caller-supplied strftime pattern as argument.
    Strftime,
    /// Time, `14:32:14`.
    Time24Seconds,
    /// Time, `02:32:14`.
    Time12Seconds,
    /// Time, `02:32 PM`.
    TimeAmPm,
    /// Time, `14:32`.
    Time24Short,
    /// Name of the real user.
    Username,
    /// Working directory with `$HOME` collapsed; optional argument replaces `~`.
    CwdTilde,
    /// Basename of [`ElementKind::CwdTilde`].
    CwdTildeBasename,
    /// `#` for root, `$` otherwise; optional [`Argument::Markers`] override.
    PrivilegeMarker,
}

impl ElementKind {
    /// The fixed strftime pattern for the time kinds.
    pub fn time_pattern(self) -> Option<&'static str> {
        match self {
            ElementKind::WeekdayDate => Some("%a %b %d"),
            ElementKind::Time24Seconds => Some("%H:%M:%S"),
            ElementKind::Time12Seconds => Some("%I:%M:%S"),
            ElementKind::TimeAmPm => Some("%I:%M %p"),
            ElementKind::Time24Short => Some("%H:%M"),
            _ => None,
        }
    }
}

/// Optional argument carried by an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// Literal text, strftime pattern, or tilde replacement depending on the kind.
    Text(&'static str),
    /// Privilege markers used instead of `#` and `$`.
    Markers {
        root: &'static str,
        user: &'static str,
    },
}

/// One entry of the prompt catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptElement {
    pub kind: ElementKind,
    pub argument: Option<Argument>,
}

impl PromptElement {
    pub const fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            argument: None,
        }
    }

    pub const fn literal(text: &'static str) -> Self {
        Self::with_text(ElementKind::Literal, text)
    }

    pub const fn with_text(kind: ElementKind, text: &'static str) -> Self {
        Self {
            kind,
            argument: Some(Argument::Text(text)),
        }
    }

    pub const fn markers(root: &'static str, user: &'static str) -> Self {
        Self {
            kind: ElementKind::PrivilegeMarker,
            argument: Some(Argument::Markers { root, user }),
        }
    }

    /// The text argument, if the element carries one.
    pub fn text(&self) -> Option<&'static str> {
        match self.argument {
            Some(Argument::Text(text)) => Some(text),
            _ => None,
        }
    }
}
