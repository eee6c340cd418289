//! Working directory resolver with home collapsing.

use tracing::debug;

use super::path::{basename, collapse_home};
use super::user::home_dir;
use crate::fragment::{Fragment, token};
use crate::system::System;

pub(crate) const DEFAULT_TILDE: &str = "~";

/// Working directory with the home prefix replaced by `tilde` (default `~`).
///
/// With `base` set only the last component is kept, so `~/proj` becomes `proj` and the
/// home directory itself stays `~`.
pub(crate) fn cwd_tilde<S: System + ?Sized>(
    system: &S,
    tilde: Option<&str>,
    base: bool,
) -> Fragment {
    let cwd = match system.current_dir() {
        Ok(cwd) => cwd,
        Err(errno) => return Fragment::error(token::GETCWD, errno),
    };

    let home = home_dir(system);
    if home.is_error() {
        debug!(owned = home.is_owned(), "Home directory lookup failed");
    }
    let home = match home.into_path() {
        Ok(home) => home,
        Err(diagnostic) => return Fragment::Failed(diagnostic),
    };

    let shown = collapse_home(&cwd, &home, tilde.unwrap_or(DEFAULT_TILDE)).unwrap_or(cwd);
    drop(home);

    if !base {
        return Fragment::copied(&shown.to_string_lossy(), token::MALLOC);
    }
    match basename(&shown) {
        Ok(name) => Fragment::copied(&name.to_string_lossy(), token::MALLOC),
        Err(errno) => Fragment::error(token::BASENAMER, errno),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::FixedSystem;
    use nix::errno::Errno;

    fn alice(cwd: &str) -> FixedSystem {
        FixedSystem::new()
            .home(Some("/home/alice"))
            .cwd(cwd)
    }

    #[test]
    fn test_collapses_home() {
        let fragment = cwd_tilde(&alice("/home/alice/proj"), None, false);
        assert_eq!(fragment, Fragment::Owned("~/proj".to_string()));
        assert!(fragment.is_owned());
    }

    #[test]
    fn test_outside_home_unchanged() {
        assert_eq!(cwd_tilde(&alice("/etc"), None, false).as_str(), "/etc");
        assert_eq!(
            cwd_tilde(&alice("/home/alicex"), None, false).as_str(),
            "/home/alicex"
        );
    }

    #[test]
    fn test_at_home() {
        assert_eq!(cwd_tilde(&alice("/home/alice"), None, false).as_str(), "~");
        assert_eq!(cwd_tilde(&alice("/home/alice"), None, true).as_str(), "~");
    }

    #[test]
    fn test_basename_variant() {
        let fragment = cwd_tilde(&alice("/home/alice/proj"), None, true);
        assert_eq!(fragment, Fragment::Owned("proj".to_string()));
        assert_eq!(cwd_tilde(&alice("/etc"), None, true).as_str(), "etc");
        assert_eq!(cwd_tilde(&alice("/"), None, true).as_str(), "/");
    }

    #[test]
    fn test_custom_tilde() {
        assert_eq!(
            cwd_tilde(&alice("/home/alice/proj"), Some("HOME"), false).as_str(),
            "HOME/proj"
        );
    }

    #[test]
    fn test_cwd_fails() {
        let system = alice("/").cwd_error(Errno::ENOENT);
        let fragment = cwd_tilde(&system, None, false);
        assert_eq!(fragment.as_str(), "!ENOENT!");
        assert!(fragment.is_owned());

        let unnamed = alice("/").cwd_error(Errno::UnknownErrno);
        assert_eq!(
            cwd_tilde(&unnamed, None, true),
            Fragment::token(token::GETCWD)
        );
    }

    #[test]
    fn test_home_from_database() {
        let system = FixedSystem::new()
            .home(None)
            .user("alice", "/srv/alice")
            .cwd("/srv/alice/notes");
        assert_eq!(cwd_tilde(&system, None, false).as_str(), "~/notes");
    }

    #[test]
    fn test_home_errors_keep_ownership() {
        let not_found = FixedSystem::new().home(None).no_user().cwd("/tmp");
        let fragment = cwd_tilde(&not_found, None, false);
        assert_eq!(fragment, Fragment::token(token::USERNOTFOUND));
        assert!(!fragment.is_owned());

        let lookup_failed = FixedSystem::new()
            .home(None)
            .user_error(Errno::EIO)
            .cwd("/tmp");
        let fragment = cwd_tilde(&lookup_failed, None, false);
        assert_eq!(fragment.as_str(), "!EIO!");
        assert!(fragment.is_owned());
    }
}
