//! Path helpers shared by the tty and cwd resolvers.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use nix::errno::Errno;
use nix::libc;

pub(crate) const PATH_MAX: usize = libc::PATH_MAX as usize;

/// Last component of `path` with POSIX `basename` semantics.
///
/// An empty path yields `.`, a bare root yields `/`. Fails with `ENAMETOOLONG` when the
/// component cannot fit a `PATH_MAX` buffer.
pub(crate) fn basename(path: &Path) -> Result<&OsStr, Errno> {
    let base = match path.components().next_back() {
        Some(component) => component.as_os_str(),
        None => OsStr::new("."),
    };
    if base.len() >= PATH_MAX {
        return Err(Errno::ENAMETOOLONG);
    }
    Ok(base)
}

/// Replaces a leading `home` in `cwd` with `tilde`, matching whole components only.
///
/// Returns `None` when `cwd` is not inside `home` or `home` is empty.
pub(crate) fn collapse_home(cwd: &Path, home: &Path, tilde: &str) -> Option<PathBuf> {
    if home.as_os_str().is_empty() {
        return None;
    }
    let rest = cwd.strip_prefix(home).ok()?;
    let mut collapsed = PathBuf::from(tilde);
    if !rest.as_os_str().is_empty() {
        collapsed.push(rest);
    }
    Some(collapsed)
}
