//! Build-time prompt configuration.
//!
//! Edit [`PROMPT`] to change the prompt; it is compiled into the binary. The default
//! mimics the Gentoo bash prompt for non-root users: a green `user@host`, then the blue
//! working directory and privilege marker.

use crate::catalog::{ElementKind, PromptElement};

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "CPROMPT_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid. Stderr stays quiet by default.
pub const DEFAULT_LOG_FILTER: &str = "off";

const GREEN_BOLD: &str = "\x1b[1;32m";
const BLUE_BOLD: &str = "\x1b[1;34m";
const RESET: &str = "\x1b[0m";

/// The prompt, in display order.
pub const PROMPT: &[PromptElement] = &[
    PromptElement::literal(GREEN_BOLD),
    PromptElement::new(ElementKind::Username),
    PromptElement::literal("@"),
    PromptElement::new(ElementKind::HostnameShort),
    PromptElement::literal(BLUE_BOLD),
    PromptElement::new(ElementKind::Space),
    PromptElement::new(ElementKind::CwdTilde),
    PromptElement::new(ElementKind::Space),
    PromptElement::new(ElementKind::PrivilegeMarker),
    PromptElement::literal(RESET),
    PromptElement::new(ElementKind::Space),
];
