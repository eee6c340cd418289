//! Render Tests
//!
//! End-to-end rendering of element catalogs against preset system answers.
//!
//! Run: cargo nextest run --test render_tests

use chrono::{Local, TimeZone};
use cprompt::fragment::token;
use cprompt::{Diagnostic, ElementKind, FixedSystem, Fragment, PromptElement, Resolver};
use nix::errno::Errno;

const GREETING: &[PromptElement] = &[
    PromptElement::literal("hi "),
    PromptElement::new(ElementKind::Username),
    PromptElement::literal("!"),
];

fn failed(token: &'static str) -> Fragment {
    Fragment::Failed(Diagnostic::Token(token))
}

// =============================================================================
// Output
// =============================================================================

mod output_tests {
    use super::*;

    #[test]
    fn test_greeting_written_with_newline() {
        let resolver = Resolver::new(FixedSystem::new().user("bob", "/home/bob"));
        let prompt = resolver.render(GREETING);

        let mut out = Vec::new();
        prompt.write_to(&mut out).unwrap();
        assert_eq!(out, b"hi bob!\n");
        assert_eq!(prompt.to_string(), "hi bob!");
    }

    #[test]
    fn test_empty_catalog_writes_newline() {
        let resolver = Resolver::new(FixedSystem::new());
        let prompt = resolver.render(&[]);
        assert!(prompt.is_empty());
        assert_eq!(prompt.line(), "\n");
    }

    #[test]
    fn test_owned_count_tracks_dynamic_elements() {
        let resolver = Resolver::new(FixedSystem::new().user("bob", "/home/bob"));
        let prompt = resolver.render(GREETING);
        assert_eq!(prompt.owned_count(), 1);
        assert_eq!(prompt.failures().count(), 0);
    }
}

// =============================================================================
// Element scenarios
// =============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_cwd_tilde_scenarios() {
        let catalog = [
            PromptElement::new(ElementKind::CwdTilde),
            PromptElement::literal(" "),
            PromptElement::new(ElementKind::CwdTildeBasename),
        ];
        let cases = [
            ("/home/alice/proj", "~/proj proj"),
            ("/home/alice", "~ ~"),
            ("/etc/ssh", "/etc/ssh ssh"),
        ];
        for (cwd, expected) in cases {
            let system = FixedSystem::new().home(Some("/home/alice")).cwd(cwd);
            let prompt = Resolver::new(system).render(&catalog);
            assert_eq!(prompt.to_string(), expected, "cwd {cwd}");
        }
    }

    #[test]
    fn test_tty_basename() {
        let system = FixedSystem::new().tty("/dev/pts/3");
        let fragment = Resolver::new(system).resolve(&PromptElement::new(ElementKind::TtyBasename));
        assert_eq!(fragment, Fragment::Owned("3".to_string()));
    }

    #[test]
    fn test_no_terminal() {
        let system = FixedSystem::new().no_tty();
        let fragment = Resolver::new(system).resolve(&PromptElement::new(ElementKind::TtyBasename));
        assert_eq!(fragment.as_str(), "!ENOTTY!");
        assert!(fragment.is_owned());
    }

    #[test]
    fn test_time_elements() {
        let now = Local.with_ymd_and_hms(2024, 5, 26, 9, 5, 7).unwrap();
        let catalog = [
            PromptElement::new(ElementKind::WeekdayDate),
            PromptElement::new(ElementKind::Time24Seconds),
            PromptElement::new(ElementKind::Time12Seconds),
            PromptElement::new(ElementKind::TimeAmPm),
            PromptElement::new(ElementKind::Time24Short),
            PromptElement::with_text(ElementKind::Strftime, "%Y-%m-%d"),
        ];
        let prompt = Resolver::new(FixedSystem::new().clock(now)).render(&catalog);
        let texts: Vec<&str> = prompt.iter().map(Fragment::as_str).collect();
        assert_eq!(
            texts,
            [
                "Sun May 26",
                "09:05:07",
                "09:05:07",
                "09:05 AM",
                "09:05",
                "2024-05-26"
            ]
        );
    }

    #[test]
    fn test_privilege_marker_follows_effective_uid() {
        let catalog = [PromptElement::new(ElementKind::PrivilegeMarker)];
        let root = Resolver::new(FixedSystem::new().effective_uid(0)).render(&catalog);
        let user = Resolver::new(FixedSystem::new().effective_uid(501)).render(&catalog);
        assert_eq!(root.to_string(), "#");
        assert_eq!(user.to_string(), "$");
    }
}

// =============================================================================
// Failure isolation
// =============================================================================

mod failure_tests {
    use super::*;

    #[test]
    fn test_clock_failure_leaves_neighbors_intact() {
        let catalog = [
            PromptElement::literal("["),
            PromptElement::new(ElementKind::Time24Short),
            PromptElement::literal("] "),
            PromptElement::new(ElementKind::Username),
        ];
        let system = FixedSystem::new()
            .clock_error(Errno::UnknownErrno)
            .user("bob", "/home/bob");
        let prompt = Resolver::new(system).render(&catalog);

        assert_eq!(prompt.fragments()[1], failed(token::TIME));
        assert_eq!(prompt.line(), "[!TIME!] bob\n");

        let named = Resolver::new(FixedSystem::new().clock_error(Errno::EOVERFLOW));
        let fragment = named.resolve(&catalog[1]);
        assert_eq!(fragment.as_str(), "!EOVERFLOW!");
        assert!(fragment.is_owned());
    }

    #[test]
    fn test_errno_names_are_owned() {
        let catalog = [
            PromptElement::new(ElementKind::HostnameFull),
            PromptElement::new(ElementKind::CwdTilde),
        ];
        let system = FixedSystem::new()
            .host_error(Errno::EPERM)
            .cwd_error(Errno::ENOENT);
        let prompt = Resolver::new(system).render(&catalog);

        assert_eq!(prompt.to_string(), "!EPERM!!ENOENT!");
        assert_eq!(prompt.owned_count(), 2);
        assert_eq!(prompt.failures().count(), 2);
    }

    #[test]
    fn test_static_tokens_are_borrowed() {
        let catalog = [
            PromptElement::new(ElementKind::HostnameShort),
            PromptElement::new(ElementKind::ParentProcess),
        ];
        let system = FixedSystem::new().host_name_limit(None).no_parent_lookup();
        let prompt = Resolver::new(system).render(&catalog);

        assert_eq!(
            prompt.into_fragments(),
            vec![failed(token::NOHOSTNAMEMAX), failed(token::NOPROC)]
        );
    }
}
