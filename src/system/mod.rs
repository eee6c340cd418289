//! Operating system queries used by the resolvers.
//!
//! Every query reports failure as an explicit [`Errno`] value; resolvers never read the
//! ambient `errno`.
//!
//! - [`HostSystem`]: the running machine (rustix, nix, `/proc` or libproc)
//! - [`FixedSystem`]: preset answers, for tests and code-defined prompts

mod fixed;
mod host;

pub use fixed::FixedSystem;
pub use host::HostSystem;

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use chrono::{DateTime, Local};
use nix::errno::Errno;

/// A user database record whose strings live in a caller-supplied scratch buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswdEntry<'a> {
    pub name: &'a OsStr,
    pub home: &'a OsStr,
}

pub trait System {
    /// Current wall-clock time in the local timezone.
    fn now(&self) -> Result<DateTime<Local>, Errno>;

    /// Maximum hostname length; `Ok(None)` when the limit is not supported.
    fn host_name_max(&self) -> Result<Option<usize>, Errno>;

    /// Writes the hostname into `buf`, which must not grow past its capacity.
    fn hostname(&self, buf: &mut String) -> Result<(), Errno>;

    /// `Ok` when stdout is a terminal, otherwise the error `isatty` would set.
    fn stdout_terminal(&self) -> Result<(), Errno>;

    /// Device path of the terminal on stdout.
    fn stdout_tty_name(&self) -> Result<PathBuf, Errno>;

    /// Executable path of the parent process, `None` where the platform has no lookup.
    fn parent_executable(&self) -> Option<Result<PathBuf, Errno>>;

    /// Suggested scratch size for user database lookups; `Ok(None)` when unsupported.
    fn passwd_buffer_max(&self) -> Result<Option<usize>, Errno>;

    /// Looks up `uid`, storing the record strings in `scratch` (bounded by its capacity).
    fn passwd_entry<'a>(
        &'a self,
        uid: u32,
        scratch: &'a mut Vec<u8>,
    ) -> Result<Option<PasswdEntry<'a>>, Errno>;

    fn uid(&self) -> u32;

    fn euid(&self) -> u32;

    fn current_dir(&self) -> Result<PathBuf, Errno>;

    /// Value of `$HOME`, if set.
    fn home_var(&self) -> Option<OsString>;
}
