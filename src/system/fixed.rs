//! Preset system answers.
//!
//! Useful for testing and for rendering a prompt from code-defined values.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};
use nix::errno::Errno;

use super::{PasswdEntry, System};

#[derive(Debug, Clone)]
struct FixedUser {
    name: OsString,
    home: OsString,
}

/// [`System`] that answers every query from preset values.
///
/// ```rust
/// use cprompt::system::{FixedSystem, System};
///
/// let system = FixedSystem::new().user("bob", "/home/bob").effective_uid(0);
/// assert_eq!(system.euid(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSystem {
    clock: Result<DateTime<Local>, Errno>,
    host_name_max: Result<Option<usize>, Errno>,
    hostname: Result<String, Errno>,
    terminal: Result<(), Errno>,
    tty: Result<PathBuf, Errno>,
    parent: Option<Result<PathBuf, Errno>>,
    passwd_buffer_max: Result<Option<usize>, Errno>,
    user: Result<Option<FixedUser>, Errno>,
    uid: u32,
    euid: u32,
    cwd: Result<PathBuf, Errno>,
    home: Option<OsString>,
}

impl Default for FixedSystem {
    fn default() -> Self {
        Self {
            // 2024-05-26T14:32:14Z
            clock: Local
                .timestamp_opt(1_716_733_934, 0)
                .single()
                .ok_or(Errno::EOVERFLOW),
            host_name_max: Ok(Some(64)),
            hostname: Ok("localhost".into()),
            terminal: Ok(()),
            tty: Ok(PathBuf::from("/dev/pts/0")),
            parent: Some(Ok(PathBuf::from("/bin/sh"))),
            passwd_buffer_max: Ok(Some(1024)),
            user: Ok(Some(FixedUser {
                name: "user".into(),
                home: "/home/user".into(),
            })),
            uid: 1000,
            euid: 1000,
            cwd: Ok(PathBuf::from("/home/user")),
            home: Some("/home/user".into()),
        }
    }
}

impl FixedSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(mut self, now: DateTime<Local>) -> Self {
        self.clock = Ok(now);
        self
    }

    pub fn clock_error(mut self, errno: Errno) -> Self {
        self.clock = Err(errno);
        self
    }

    pub fn host_name_limit(mut self, limit: Option<usize>) -> Self {
        self.host_name_max = Ok(limit);
        self
    }

    pub fn host_name_limit_error(mut self, errno: Errno) -> Self {
        self.host_name_max = Err(errno);
        self
    }

    pub fn host(mut self, name: impl Into<String>) -> Self {
        self.hostname = Ok(name.into());
        self
    }

    pub fn host_error(mut self, errno: Errno) -> Self {
        self.hostname = Err(errno);
        self
    }

    pub fn tty(mut self, path: impl Into<PathBuf>) -> Self {
        self.terminal = Ok(());
        self.tty = Ok(path.into());
        self
    }

    pub fn tty_name_error(mut self, errno: Errno) -> Self {
        self.tty = Err(errno);
        self
    }

    /// Stdout is not a terminal.
    pub fn no_tty(self) -> Self {
        self.terminal_error(Errno::ENOTTY)
    }

    /// The terminal check on stdout fails with `errno`, e.g. `EBADF` for a closed fd.
    pub fn terminal_error(mut self, errno: Errno) -> Self {
        self.terminal = Err(errno);
        self.tty = Err(errno);
        self
    }

    pub fn parent(mut self, path: impl Into<PathBuf>) -> Self {
        self.parent = Some(Ok(path.into()));
        self
    }

    pub fn parent_error(mut self, errno: Errno) -> Self {
        self.parent = Some(Err(errno));
        self
    }

    /// The platform offers no parent process lookup.
    pub fn no_parent_lookup(mut self) -> Self {
        self.parent = None;
        self
    }

    pub fn passwd_buffer(mut self, limit: Option<usize>) -> Self {
        self.passwd_buffer_max = Ok(limit);
        self
    }

    pub fn passwd_buffer_error(mut self, errno: Errno) -> Self {
        self.passwd_buffer_max = Err(errno);
        self
    }

    pub fn user(mut self, name: impl Into<OsString>, home: impl Into<OsString>) -> Self {
        self.user = Ok(Some(FixedUser {
            name: name.into(),
            home: home.into(),
        }));
        self
    }

    /// No user database record exists for the uid.
    pub fn no_user(mut self) -> Self {
        self.user = Ok(None);
        self
    }

    pub fn user_error(mut self, errno: Errno) -> Self {
        self.user = Err(errno);
        self
    }

    pub fn real_uid(mut self, uid: u32) -> Self {
        self.uid = uid;
        self
    }

    pub fn effective_uid(mut self, euid: u32) -> Self {
        self.euid = euid;
        self
    }

    pub fn cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = Ok(path.into());
        self
    }

    pub fn cwd_error(mut self, errno: Errno) -> Self {
        self.cwd = Err(errno);
        self
    }

    /// Sets or clears `$HOME`.
    pub fn home(mut self, home: Option<&str>) -> Self {
        self.home = home.map(OsString::from);
        self
    }
}

impl System for FixedSystem {
    fn now(&self) -> Result<DateTime<Local>, Errno> {
        self.clock
    }

    fn host_name_max(&self) -> Result<Option<usize>, Errno> {
        self.host_name_max
    }

    fn hostname(&self, buf: &mut String) -> Result<(), Errno> {
        let name = self.hostname.as_ref().map_err(|errno| *errno)?;
        if name.len() > buf.capacity() - buf.len() {
            return Err(Errno::ENAMETOOLONG);
        }
        buf.push_str(name);
        Ok(())
    }

    fn stdout_terminal(&self) -> Result<(), Errno> {
        self.terminal
    }

    fn stdout_tty_name(&self) -> Result<PathBuf, Errno> {
        self.tty.clone()
    }

    fn parent_executable(&self) -> Option<Result<PathBuf, Errno>> {
        self.parent.clone()
    }

    fn passwd_buffer_max(&self) -> Result<Option<usize>, Errno> {
        self.passwd_buffer_max
    }

    fn passwd_entry<'a>(
        &'a self,
        _uid: u32,
        scratch: &'a mut Vec<u8>,
    ) -> Result<Option<PasswdEntry<'a>>, Errno> {
        let Some(user) = self.user.as_ref().map_err(|errno| *errno)? else {
            return Ok(None);
        };
        // Same bound as getpwuid_r: both strings plus terminators must fit the scratch.
        if user.name.len() + user.home.len() + 2 > scratch.capacity() {
            return Err(Errno::ERANGE);
        }
        Ok(Some(PasswdEntry {
            name: OsStr::new(&user.name),
            home: OsStr::new(&user.home),
        }))
    }

    fn uid(&self) -> u32 {
        self.uid
    }

    fn euid(&self) -> u32 {
        self.euid
    }

    fn current_dir(&self) -> Result<PathBuf, Errno> {
        self.cwd.clone()
    }

    fn home_var(&self) -> Option<OsString> {
        self.home.clone()
    }
}
