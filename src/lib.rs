//! # cprompt
//!
//! Shell prompt renderer driven by a compile-time element catalog.
//!
//! Each [`PromptElement`] of [`config::PROMPT`] resolves to one [`Fragment`]: static
//! text, text allocated from an OS query, or a `!TOKEN!` diagnostic when the query
//! fails. A failing element never prevents the others from rendering.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> Result<(), cprompt::Error> {
//!     cprompt::render().write_to(std::io::stdout().lock())
//! }
//! ```
//!
//! ## Custom catalog and preset answers
//!
//! ```rust
//! use cprompt::{ElementKind, PromptElement, Resolver};
//! use cprompt::system::FixedSystem;
//!
//! const CATALOG: &[PromptElement] = &[
//!     PromptElement::literal("hi "),
//!     PromptElement::new(ElementKind::Username),
//!     PromptElement::literal("!"),
//! ];
//!
//! let resolver = Resolver::new(FixedSystem::new().user("bob", "/home/bob"));
//! assert_eq!(resolver.render(CATALOG).line(), "hi bob!\n");
//! ```

pub mod catalog;
pub mod config;
pub mod fragment;
pub mod observability;
pub mod prompt;
pub mod resolve;
pub mod system;

pub use catalog::{Argument, ElementKind, PromptElement};
pub use fragment::{Diagnostic, Fragment, format_error};
pub use prompt::Prompt;
pub use resolve::Resolver;
pub use system::{FixedSystem, HostSystem, System};

/// Error type for cprompt operations.
///
/// Element resolution never fails; these cover the process around it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Writing the prompt failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Renders [`config::PROMPT`] against the running machine.
pub fn render() -> Prompt {
    Resolver::new(HostSystem::new()).render(config::PROMPT)
}
