//! The running machine.

use std::ffi::{CStr, OsStr, OsString};
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::PathBuf;
use std::ptr;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone};
use nix::errno::Errno;
use nix::libc;
use nix::unistd::{SysconfVar, sysconf};

use super::{PasswdEntry, System};

/// [`System`] backed by real OS calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystem;

impl HostSystem {
    pub fn new() -> Self {
        Self
    }
}

fn from_rustix(err: rustix::io::Errno) -> Errno {
    Errno::from_raw(err.raw_os_error())
}

#[cfg(target_os = "linux")]
fn from_io(err: &io::Error) -> Errno {
    err.raw_os_error()
        .map(Errno::from_raw)
        .unwrap_or(Errno::UnknownErrno)
}

fn sysconf_limit(var: SysconfVar) -> Result<Option<usize>, Errno> {
    Ok(sysconf(var)?.and_then(|limit| usize::try_from(limit).ok()))
}

fn path_from_c(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(OsString::from_vec(bytes))
}

impl System for HostSystem {
    fn now(&self) -> Result<DateTime<Local>, Errno> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| Errno::EOVERFLOW)?;
        let secs = i64::try_from(since_epoch.as_secs()).map_err(|_| Errno::EOVERFLOW)?;
        Local
            .timestamp_opt(secs, since_epoch.subsec_nanos())
            .single()
            .ok_or(Errno::EOVERFLOW)
    }

    fn host_name_max(&self) -> Result<Option<usize>, Errno> {
        sysconf_limit(SysconfVar::HOST_NAME_MAX)
    }

    fn hostname(&self, buf: &mut String) -> Result<(), Errno> {
        let uname = rustix::system::uname();
        let nodename = uname.nodename().to_string_lossy();
        if nodename.len() > buf.capacity() - buf.len() {
            return Err(Errno::ENAMETOOLONG);
        }
        buf.push_str(&nodename);
        Ok(())
    }

    fn stdout_terminal(&self) -> Result<(), Errno> {
        rustix::termios::tcgetattr(io::stdout())
            .map(drop)
            .map_err(from_rustix)
    }

    fn stdout_tty_name(&self) -> Result<PathBuf, Errno> {
        let name = rustix::termios::ttyname(io::stdout(), Vec::new()).map_err(from_rustix)?;
        Ok(path_from_c(name.into_bytes()))
    }

    #[cfg(target_os = "linux")]
    fn parent_executable(&self) -> Option<Result<PathBuf, Errno>> {
        let lookup = match rustix::process::getppid() {
            Some(ppid) => std::fs::read_link(format!("/proc/{}/exe", ppid.as_raw_nonzero()))
                .map_err(|e| from_io(&e)),
            None => Err(Errno::ESRCH),
        };
        Some(lookup)
    }

    #[cfg(target_os = "macos")]
    fn parent_executable(&self) -> Option<Result<PathBuf, Errno>> {
        let lookup = match rustix::process::getppid() {
            Some(ppid) => libproc::proc_pid::pidpath(ppid.as_raw_nonzero().get())
                .map(PathBuf::from)
                .map_err(|_| Errno::UnknownErrno),
            None => Err(Errno::ESRCH),
        };
        Some(lookup)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    fn parent_executable(&self) -> Option<Result<PathBuf, Errno>> {
        None
    }

    fn passwd_buffer_max(&self) -> Result<Option<usize>, Errno> {
        sysconf_limit(SysconfVar::GETPW_R_SIZE_MAX)
    }

    fn passwd_entry<'a>(
        &'a self,
        uid: u32,
        scratch: &'a mut Vec<u8>,
    ) -> Result<Option<PasswdEntry<'a>>, Errno> {
        let mut record = MaybeUninit::<libc::passwd>::uninit();
        let mut found: *mut libc::passwd = ptr::null_mut();

        // SAFETY: `record` and `found` are valid out-pointers, and `scratch` provides
        // `capacity()` writable bytes that getpwuid_r never writes past.
        let status = unsafe {
            libc::getpwuid_r(
                uid,
                record.as_mut_ptr(),
                scratch.as_mut_ptr().cast(),
                scratch.capacity(),
                &mut found,
            )
        };
        if status != 0 {
            return Err(Errno::from_raw(status));
        }
        if found.is_null() {
            return Ok(None);
        }

        // SAFETY: a non-null result means `record` is initialised and its string fields
        // are NUL-terminated and point into `scratch`, which is borrowed for 'a.
        let (name, home) = unsafe {
            let record = record.assume_init_ref();
            (CStr::from_ptr(record.pw_name), CStr::from_ptr(record.pw_dir))
        };
        Ok(Some(PasswdEntry {
            name: OsStr::from_bytes(name.to_bytes()),
            home: OsStr::from_bytes(home.to_bytes()),
        }))
    }

    fn uid(&self) -> u32 {
        rustix::process::getuid().as_raw()
    }

    fn euid(&self) -> u32 {
        rustix::process::geteuid().as_raw()
    }

    fn current_dir(&self) -> Result<PathBuf, Errno> {
        let cwd = rustix::process::getcwd(Vec::with_capacity(libc::PATH_MAX as usize))
            .map_err(from_rustix)?;
        Ok(path_from_c(cwd.into_bytes()))
    }

    fn home_var(&self) -> Option<OsString> {
        std::env::var_os("HOME")
    }
}
