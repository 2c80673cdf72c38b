//! Capture of the ambient process state the resolver reads.

use std::collections::HashMap;
use std::env;

/// The platform family the process runs on.
///
/// Windows consoles are assumed ANSI-capable, so this is the only
/// distinction the cascade cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows.
    Windows,
    /// Everything else.
    Other,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Other }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// A point-in-time copy of the environment table, argument list, and
/// platform identity.
///
/// A snapshot is plain owned data: resolving against it never touches
/// process globals, so arbitrary environments can be constructed in tests
/// without `env::set_var`. Re-reading the environment means taking a new
/// snapshot; results are never cached across snapshots.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    env: HashMap<String, String>,
    args: Vec<String>,
    platform: Platform,
}

impl Snapshot {
    /// Captures the live environment, argument list, and platform.
    ///
    /// Variables and arguments that are not valid UTF-8 are skipped; the
    /// keys the resolver consults are ASCII in practice.
    #[must_use]
    pub fn from_process() -> Self {
        let env = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();

        let args = env::args_os()
            .skip(1)
            .filter_map(|arg| arg.into_string().ok())
            .collect();

        Self {
            env,
            args,
            platform: Platform::current(),
        }
    }

    /// Creates a snapshot from explicit inputs.
    pub fn new(
        env: impl IntoIterator<Item = (String, String)>,
        args: Vec<String>,
        platform: Platform,
    ) -> Self {
        Self {
            env: env.into_iter().collect(),
            args,
            platform,
        }
    }

    /// Returns the value of an environment variable, if present.
    ///
    /// Presence with an empty value is distinct from absence.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    /// Whether an environment variable is present at all.
    #[must_use]
    pub fn has_var(&self, name: &str) -> bool {
        self.env.contains_key(name)
    }

    pub(crate) fn args(&self) -> &[String] {
        &self.args
    }

    pub(crate) fn platform(&self) -> Platform {
        self.platform
    }
}
