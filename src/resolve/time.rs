//! Clock resolvers.

use std::fmt::{self, Write};

use crate::fragment::{Fragment, token};
use crate::system::System;

/// Buffer size for formatted times, including room for a terminator.
pub(crate) const MAX_STRFTIME_SIZE: usize = 50;

/// `fmt::Write` sink that refuses to grow its buffer past `limit` bytes.
struct Bounded<'a> {
    buf: &'a mut String,
    limit: usize,
}

impl Write for Bounded<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.buf.len() + s.len() > self.limit {
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}

/// Formats the current time with a strftime `pattern`.
///
/// Output that is empty or needs `MAX_STRFTIME_SIZE` bytes or more, and invalid patterns,
/// resolve to `!STRFTIME!`.
pub(crate) fn formatted_time<S: System + ?Sized>(system: &S, pattern: Option<&str>) -> Fragment {
    let now = match system.now() {
        Ok(now) => now,
        Err(errno) => return Fragment::error(token::TIME, errno),
    };
    let Some(pattern) = pattern else {
        return Fragment::token(token::STRFTIME);
    };

    let mut buf = String::new();
    if buf.try_reserve_exact(MAX_STRFTIME_SIZE).is_err() {
        return Fragment::token(token::MALLOC);
    }
    let mut sink = Bounded {
        buf: &mut buf,
        limit: MAX_STRFTIME_SIZE - 1,
    };
    if write!(sink, "{}", now.format(pattern)).is_err() || buf.is_empty() {
        return Fragment::token(token::STRFTIME);
    }
    Fragment::Owned(buf)
}
