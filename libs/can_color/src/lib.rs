//! Decides whether an output stream should receive ANSI color output.
//!
//! The decision is a pure function over three inputs: an optional stream
//! descriptor (only its TTY-ness matters), a snapshot of the process
//! environment, and the process argument list. [`Resolver`] evaluates them
//! as an ordered cascade: explicit overrides (`FORCE_COLOR`, `--color` /
//! `--no-color` flags) first, then CI detection, then terminal identity
//! heuristics.
//!
//! Nothing here emits escape sequences and nothing is cached; every call
//! re-evaluates against the [`Snapshot`] it was given.
//!
//! # Examples
//!
//! ```
//! use std::io::stdout;
//!
//! if can_color::can_color(&stdout()) {
//!     println!("\x1b[32mgreen\x1b[0m");
//! } else {
//!     println!("green");
//! }
//! ```
//!
//! For tests or embedding, build the inputs explicitly instead of reading
//! process state:
//!
//! ```
//! use can_color::{Platform, Resolver, Snapshot};
//!
//! let snapshot = Snapshot::new(
//!     [("COLORTERM".to_owned(), "truecolor".to_owned())],
//!     Vec::new(),
//!     Platform::Other,
//! );
//! assert!(Resolver::new(snapshot).streamless());
//! ```

// for benchmarks
#[cfg(test)]
use criterion as _;

pub mod browser;
mod cascade;
mod flags;
mod force;
mod resolve;
mod snapshot;

pub use cascade::Heuristics;
pub use resolve::Resolver;
pub use snapshot::{Platform, Snapshot};

/// Resolves color support for `stream` from live process state.
///
/// Flag sniffing is enabled; this is equivalent to
/// [`Resolver::from_process`] followed by [`Resolver::stream`].
#[must_use]
pub fn can_color<T: std::io::IsTerminal>(stream: &T) -> bool {
    Resolver::from_process().stream(stream)
}
