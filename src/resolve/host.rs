//! Hostname resolver.

use crate::fragment::{Fragment, token};
use crate::system::System;

/// Resolves the hostname, cut at the first `.` when `short` is set.
pub(crate) fn hostname<S: System + ?Sized>(system: &S, short: bool) -> Fragment {
    let max_len = match system.host_name_max() {
        Ok(Some(max_len)) => max_len,
        Ok(None) => return Fragment::token(token::NOHOSTNAMEMAX),
        Err(errno) => return Fragment::error(token::SYSCONF, errno),
    };

    let mut name = String::new();
    if name.try_reserve_exact(max_len).is_err() {
        return Fragment::token(token::MALLOC);
    }
    if let Err(errno) = system.hostname(&mut name) {
        return Fragment::error(token::GETHOSTNAME, errno);
    }
    if short && let Some(dot) = name.find('.') {
        name.truncate(dot);
    }
    Fragment::Owned(name)
}
