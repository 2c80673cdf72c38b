//! The ordered decision cascade and its heuristic tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::snapshot::{Platform, Snapshot};

/// `TEAMCITY_VERSION` values that render ANSI: 9.1 and later.
static TEAMCITY_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(9\.(0*[1-9]\d*)\.|\d{2,}\.)").expect("valid regex"));

/// `TERM` values ending in `-256color` (or bare `-256`).
static TERM_256: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-256(color)?$").expect("valid regex"));

/// The accumulated legacy `TERM` family heuristic. Pattern data, not a
/// principled rule; keep in sync with its property tests rather than
/// restructuring it.
static TERM_LEGACY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^screen|^xterm|^vt100|^vt220|^rxvt|color|ansi|cygwin|linux")
        .expect("valid regex")
});

/// The identifier tables the cascade matches environment values against.
///
/// These lists have shifted across versions of the policy as vendors come
/// and go, so they are configuration rather than part of the cascade:
/// swap in your own tables via [`Resolver::heuristics`] to track a
/// different vintage.
///
/// [`Resolver::heuristics`]: crate::Resolver::heuristics
#[derive(Debug, Clone)]
pub struct Heuristics {
    /// Environment variables whose presence identifies a CI vendor with
    /// ANSI-capable logs. Only consulted when `CI` itself is set.
    pub ci_markers: &'static [&'static str],
    /// Exact `TERM` values known to support color without matching the
    /// generic patterns.
    pub color_terms: &'static [&'static str],
    /// Exact `TERM_PROGRAM` values known to support color.
    pub term_programs: &'static [&'static str],
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            ci_markers: &[
                "GITHUB_ACTIONS",
                "GITEA_ACTIONS",
                "CIRCLECI",
                "TRAVIS",
                "APPVEYOR",
                "GITLAB_CI",
                "BUILDKITE",
                "DRONE",
            ],
            color_terms: &["xterm-kitty", "xterm-ghostty", "wezterm"],
            term_programs: &["iTerm.app", "Apple_Terminal"],
        }
    }
}

/// Runs the cascade. First matching rule decides; later rules never see
/// inputs an earlier rule already settled.
pub(crate) fn decide(
    snapshot: &Snapshot,
    is_tty: Option<bool>,
    forced: Option<bool>,
    heuristics: &Heuristics,
) -> bool {
    let value = decide_inner(snapshot, is_tty, forced, heuristics);
    log::trace!("resolved color support: {value}");
    value
}

fn decide_inner(
    snapshot: &Snapshot,
    is_tty: Option<bool>,
    forced: Option<bool>,
    heuristics: &Heuristics,
) -> bool {
    if forced == Some(false) {
        return false;
    }

    // Azure DevOps Pipelines renders ANSI but its streams do not report
    // as TTYs, so this must come before the TTY check.
    if snapshot.has_var("TF_BUILD") && snapshot.has_var("AGENT_NAME") {
        return true;
    }

    if is_tty == Some(false) && forced.is_none() {
        return false;
    }

    // From here on "unset" softens into a plain `false` that the
    // heuristics below may still override.
    let forced = forced.unwrap_or(false);

    if snapshot.var("TERM") == Some("dumb") {
        return forced;
    }

    snapshot.platform() == Platform::Windows
        || is_recognized_ci(snapshot, forced, heuristics)
        || snapshot
            .var("TEAMCITY_VERSION")
            .is_some_and(|version| TEAMCITY_VERSION.is_match(version))
        || snapshot.var("COLORTERM") == Some("truecolor")
        || snapshot
            .var("TERM")
            .is_some_and(|term| heuristics.color_terms.contains(&term))
        || snapshot
            .var("TERM_PROGRAM")
            .is_some_and(|program| heuristics.term_programs.contains(&program))
        || snapshot
            .var("TERM")
            .is_some_and(|term| TERM_256.is_match(term))
        || snapshot
            .var("TERM")
            .is_some_and(|term| TERM_LEGACY.is_match(term))
        || snapshot.has_var("COLORTERM")
        || forced
}

/// `CI` alone proves nothing; a vendor marker, the codeship name, or an
/// explicit force has to back it up.
fn is_recognized_ci(snapshot: &Snapshot, forced: bool, heuristics: &Heuristics) -> bool {
    snapshot.has_var("CI")
        && (heuristics
            .ci_markers
            .iter()
            .any(|marker| snapshot.has_var(marker))
            || snapshot.var("CI_NAME") == Some("codeship")
            || forced)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn teamcity_pattern() {
        assert!(!TEAMCITY_VERSION.is_match("9.0.5 (build 32523)"));
        assert!(!TEAMCITY_VERSION.is_match("9.10 (build 1)"));
        assert!(TEAMCITY_VERSION.is_match("9.1.0 (build 32523)"));
        assert!(TEAMCITY_VERSION.is_match("9.02.1"));
        assert!(TEAMCITY_VERSION.is_match("10.0.3"));
        assert!(TEAMCITY_VERSION.is_match("2024.12.1"));
        assert!(!TEAMCITY_VERSION.is_match("8.1.0"));
    }

    #[test]
    fn term_256_pattern() {
        assert!(TERM_256.is_match("xterm-256color"));
        assert!(TERM_256.is_match("screen-256COLOR"));
        assert!(TERM_256.is_match("putty-256"));
        assert!(!TERM_256.is_match("xterm-256color-extra"));
    }

    #[test]
    fn term_legacy_pattern() {
        for term in [
            "screen", "xterm", "vt100", "vt220", "rxvt-unicode", "linux", "cygwin", "ansi.sys",
            "dtterm-color", "XTERM",
        ] {
            assert!(TERM_LEGACY.is_match(term), "expected match for {term}");
        }

        assert!(!TERM_LEGACY.is_match("dumb"));
        assert!(!TERM_LEGACY.is_match("unknown"));
    }
}
