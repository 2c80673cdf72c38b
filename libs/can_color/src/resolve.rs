//! The public resolver tying the pieces together.

use std::io;

use crate::cascade::{self, Heuristics};
use crate::force;
use crate::snapshot::Snapshot;

/// Resolves whether a stream should receive ANSI color output.
///
/// A resolver owns the [`Snapshot`] it evaluates, the [`Heuristics`]
/// tables, and the flag-sniffing switch. It holds no other state and
/// caching never happens: every call walks the full cascade again, so a
/// resolver built over a fresh snapshot always reflects the environment
/// as it was captured.
#[derive(Debug, Clone)]
pub struct Resolver {
    snapshot: Snapshot,
    heuristics: Heuristics,
    sniff_flags: bool,
}

impl Resolver {
    /// Creates a resolver over an explicit snapshot.
    ///
    /// Flag sniffing is enabled and the default [`Heuristics`] apply;
    /// adjust either with the chainable setters.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            heuristics: Heuristics::default(),
            sniff_flags: true,
        }
    }

    /// Creates a resolver over the live process state.
    #[must_use]
    pub fn from_process() -> Self {
        Self::new(Snapshot::from_process())
    }

    /// Sets whether `--color`/`--no-color` style flags in the argument
    /// list count as a forcing signal.
    ///
    /// Disable this when CLI flags are irrelevant to the caller, for
    /// example when the arguments belong to a different tool entirely.
    #[must_use]
    pub fn sniff_flags(mut self, sniff: bool) -> Self {
        self.sniff_flags = sniff;
        self
    }

    /// Replaces the heuristic identifier tables.
    #[must_use]
    pub fn heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Resolves for `stream`, consulting only whether it is a terminal.
    ///
    /// A non-terminal stream resolves to `false` unless something forces
    /// color on.
    #[must_use]
    pub fn stream<T: io::IsTerminal>(&self, stream: &T) -> bool {
        self.resolve(Some(stream.is_terminal()))
    }

    /// Resolves without a stream descriptor.
    ///
    /// The non-TTY cutoff is skipped entirely; everything else behaves as
    /// in [`stream`](Self::stream).
    #[must_use]
    pub fn streamless(&self) -> bool {
        self.resolve(None)
    }

    pub(crate) fn resolve(&self, is_tty: Option<bool>) -> bool {
        let forced = force::merged(&self.snapshot, self.sniff_flags);
        cascade::decide(&self.snapshot, is_tty, forced, &self.heuristics)
    }
}
