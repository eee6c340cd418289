//! User database resolvers: username and home directory.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::PathBuf;

use crate::fragment::{Diagnostic, Fragment, format_error, token};
use crate::system::{PasswdEntry, System};

/// Runs `visit` on the real user's record.
///
/// The scratch buffer sized by `GETPW_R_SIZE_MAX` is dropped before this returns, so
/// `visit` must copy out anything it keeps.
fn with_passwd_entry<S, T>(
    system: &S,
    visit: impl FnOnce(Option<PasswdEntry<'_>>) -> T,
) -> Result<T, Diagnostic>
where
    S: System + ?Sized,
{
    let size = match system.passwd_buffer_max() {
        Ok(Some(size)) => size,
        Ok(None) => return Err(Diagnostic::Token(token::NOGETPWRSIZEMAX)),
        Err(errno) => return Err(format_error(token::SYSCONF, errno)),
    };

    let mut scratch = Vec::new();
    if scratch.try_reserve_exact(size).is_err() {
        return Err(Diagnostic::Token(token::MALLOC));
    }
    let entry = system
        .passwd_entry(system.uid(), &mut scratch)
        .map_err(|errno| format_error(token::GETPWUIDR, errno))?;
    Ok(visit(entry))
}

fn try_copy_os(text: &OsStr) -> Option<OsString> {
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(text.len()).ok()?;
    bytes.extend_from_slice(text.as_bytes());
    Some(OsString::from_vec(bytes))
}

/// Name of the real user, `nobody` when the user database has no record.
pub(crate) fn username<S: System + ?Sized>(system: &S) -> Fragment {
    with_passwd_entry(system, |entry| match entry {
        Some(entry) => Fragment::copied(&entry.name.to_string_lossy(), token::STRNDUP),
        None => Fragment::Borrowed("nobody"),
    })
    .unwrap_or_else(Fragment::Failed)
}

/// Outcome of the home directory lookup.
///
/// Ownership and success are independent: a value read from `$HOME` was not allocated by
/// the lookup, one copied out of the user database was, and a failure may carry either a
/// static token or an allocated errno name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HomeDir {
    /// From `$HOME`.
    Env(PathBuf),
    /// Lookup failed with a static token.
    StaticError(&'static str),
    /// Copied out of the user database.
    Database(PathBuf),
    /// Lookup failed with an allocated errno name.
    NamedError(String),
}

impl HomeDir {
    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, HomeDir::Database(_) | HomeDir::NamedError(_))
    }

    pub(crate) fn is_error(&self) -> bool {
        matches!(self, HomeDir::StaticError(_) | HomeDir::NamedError(_))
    }

    pub(crate) fn into_path(self) -> Result<PathBuf, Diagnostic> {
        match self {
            HomeDir::Env(path) | HomeDir::Database(path) => Ok(path),
            HomeDir::StaticError(token) => Err(Diagnostic::Token(token)),
            HomeDir::NamedError(name) => Err(Diagnostic::Named(name)),
        }
    }
}

impl From<Diagnostic> for HomeDir {
    fn from(diagnostic: Diagnostic) -> Self {
        match diagnostic {
            Diagnostic::Token(token) => HomeDir::StaticError(token),
            Diagnostic::Named(name) => HomeDir::NamedError(name),
        }
    }
}

/// Home directory from `$HOME`, falling back to the user database.
pub(crate) fn home_dir<S: System + ?Sized>(system: &S) -> HomeDir {
    if let Some(home) = system.home_var() {
        return HomeDir::Env(PathBuf::from(home));
    }

    let lookup = with_passwd_entry(system, |entry| match entry {
        Some(entry) => match try_copy_os(entry.home) {
            Some(home) => HomeDir::Database(PathBuf::from(home)),
            None => HomeDir::StaticError(token::STRNDUP),
        },
        None => HomeDir::StaticError(token::USERNOTFOUND),
    });
    lookup.unwrap_or_else(HomeDir::from)
}
