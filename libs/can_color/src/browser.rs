//! Color support detection for browser-hosted contexts.
//!
//! Browsers have no environment table, flags, or streams, so this is a
//! standalone predicate over user-agent identity rather than a variant of
//! the process resolver: Chromium-family browsers render ANSI sequences
//! in their developer consoles, everything else does not.

use std::sync::LazyLock;

use regex::Regex;

static CHROMIUM_UA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(Chrome|Chromium)/").expect("valid regex"));

/// One entry of structured user-agent brand data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    /// Brand name, e.g. `Chromium` or `Google Chrome`.
    pub brand: String,
    /// Significant version, e.g. `94`.
    pub version: String,
}

/// User-agent identity of a browser context.
///
/// `brands` carries the structured user-agent data where the host exposes
/// it; leave it empty otherwise and the string form alone decides.
#[derive(Debug, Clone, Default)]
pub struct UserAgent {
    /// The classic user-agent string.
    pub user_agent: String,
    /// Structured brand data, possibly empty.
    pub brands: Vec<Brand>,
}

/// Whether the browser identified by `user_agent` renders ANSI color.
///
/// True when the structured brand data reports `Chromium` newer than
/// version 93, or failing that when the user-agent string names Chrome or
/// Chromium.
#[must_use]
pub fn can_color(user_agent: &UserAgent) -> bool {
    let chromium_brand = user_agent
        .brands
        .iter()
        .find(|entry| entry.brand == "Chromium")
        .and_then(|entry| entry.version.parse::<u32>().ok())
        .is_some_and(|version| version > 93);

    chromium_brand || CHROMIUM_UA.is_match(&user_agent.user_agent)
}

#[cfg(test)]
mod test {
    use super::*;

    fn brand(name: &str, version: &str) -> Brand {
        Brand {
            brand: name.to_owned(),
            version: version.to_owned(),
        }
    }

    #[test]
    fn chromium_brand_newer_than_93() {
        let ua = UserAgent {
            user_agent: String::new(),
            brands: vec![brand("Not;A Brand", "99"), brand("Chromium", "94")],
        };

        assert!(can_color(&ua));
    }

    #[test]
    fn chromium_brand_93_or_older() {
        let ua = UserAgent {
            user_agent: String::new(),
            brands: vec![brand("Chromium", "93")],
        };

        assert!(!can_color(&ua));
    }

    #[test]
    fn unparseable_brand_version() {
        let ua = UserAgent {
            user_agent: String::new(),
            brands: vec![brand("Chromium", "ninety-four")],
        };

        assert!(!can_color(&ua));
    }

    #[test]
    fn user_agent_string_fallback() {
        let chrome = UserAgent {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_owned(),
            brands: Vec::new(),
        };
        let firefox = UserAgent {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0"
                .to_owned(),
            brands: Vec::new(),
        };

        assert!(can_color(&chrome));
        assert!(!can_color(&firefox));
    }

    #[test]
    fn empty_identity() {
        assert!(!can_color(&UserAgent::default()));
    }
}
