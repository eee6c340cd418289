//! Terminal and parent process resolvers.

use super::path::basename;
use crate::fragment::{Fragment, token};
use crate::system::System;

/// Basename of the terminal device on stdout, e.g. `3` for `/dev/pts/3`.
pub(crate) fn tty_basename<S: System + ?Sized>(system: &S) -> Fragment {
    if let Err(errno) = system.stdout_terminal() {
        return Fragment::error(token::ISATTY, errno);
    }
    let device = match system.stdout_tty_name() {
        Ok(device) => device,
        Err(errno) => return Fragment::error(token::TTYNAME, errno),
    };
    match basename(&device) {
        Ok(name) => Fragment::copied(&name.to_string_lossy(), token::MALLOC),
        Err(errno) => Fragment::error(token::BASENAMER, errno),
    }
}

/// Executable path of the parent process.
pub(crate) fn parent_process<S: System + ?Sized>(system: &S) -> Fragment {
    match system.parent_executable() {
        Some(Ok(path)) => Fragment::copied(&path.to_string_lossy(), token::MALLOC),
        Some(Err(errno)) => Fragment::error(token::PROCPIDPATH, errno),
        None => Fragment::token(token::NOPROC),
    }
}
