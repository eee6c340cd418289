//! Element resolution engine.
//!
//! [`Resolver`] maps each [`PromptElement`] to exactly one [`Fragment`]. Resolution is a
//! pure function of the element kind and the [`System`] answers; elements never depend on
//! each other, and no failure stops the remaining elements from resolving.

mod cwd;
mod host;
mod path;
mod time;
mod tty;
mod user;

use tracing::{debug, trace};

use crate::catalog::{Argument, ElementKind, PromptElement};
use crate::fragment::Fragment;
use crate::prompt::Prompt;
use crate::system::System;

const ROOT_MARKER: &str = "#";
const USER_MARKER: &str = "$";

pub struct Resolver<S> {
    system: S,
}

impl<S: System> Resolver<S> {
    pub fn new(system: S) -> Self {
        Self { system }
    }

    /// Resolves every element of `catalog` in order.
    pub fn render(&self, catalog: &[PromptElement]) -> Prompt {
        catalog.iter().map(|element| self.resolve(element)).collect()
    }

    pub fn resolve(&self, element: &PromptElement) -> Fragment {
        let system = &self.system;
        let fragment = match element.kind {
            ElementKind::Literal => Fragment::Borrowed(element.text().unwrap_or("")),
            ElementKind::Space => Fragment::Borrowed(" "),
            ElementKind::Bell => Fragment::Borrowed("\x07"),
            ElementKind::PrivilegeMarker => self.privilege_marker(element.argument),
            ElementKind::HostnameShort => host::hostname(system, true),
            ElementKind::HostnameFull => host::hostname(system, false),
            ElementKind::TtyBasename => tty::tty_basename(system),
            ElementKind::ParentProcess => tty::parent_process(system),
            ElementKind::Strftime => time::formatted_time(system, element.text()),
            ElementKind::WeekdayDate
            | ElementKind::Time24Seconds
            | ElementKind::Time12Seconds
            | ElementKind::TimeAmPm
            | ElementKind::Time24Short => time::formatted_time(system, element.kind.time_pattern()),
            ElementKind::Username => user::username(system),
            ElementKind::CwdTilde => cwd::cwd_tilde(system, element.text(), false),
            ElementKind::CwdTildeBasename => cwd::cwd_tilde(system, element.text(), true),
        };

        match &fragment {
            Fragment::Failed(diagnostic) => {
                debug!(kind = ?element.kind, %diagnostic, "Element resolved to diagnostic")
            }
            _ => trace!(kind = ?element.kind, owned = fragment.is_owned(), "Element resolved"),
        }
        fragment
    }

    fn privilege_marker(&self, argument: Option<Argument>) -> Fragment {
        let (root, user) = match argument {
            Some(Argument::Markers { root, user }) => (root, user),
            _ => (ROOT_MARKER, USER_MARKER),
        };
        Fragment::Borrowed(if self.system.euid() == 0 { root } else { user })
    }
}
