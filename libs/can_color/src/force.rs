//! Interpreting explicit color forcing from `FORCE_COLOR` and CLI flags.
//!
//! Both sources produce a tri-state: `Some(true)` forces color on,
//! `Some(false)` forces it off, `None` means no opinion. The environment
//! always wins over flags when it has an opinion.

use crate::flags::has_flag;
use crate::snapshot::Snapshot;

/// Tri-state from the `FORCE_COLOR` environment variable alone.
///
/// `""` and `"true"` force on, `"false"` forces off, integers force on iff
/// they are at least 1. Anything unparseable is no opinion rather than a
/// hard off, so garbage in the variable does not disable explicit flags.
pub(crate) fn from_env(snapshot: &Snapshot) -> Option<bool> {
    let value = snapshot.var("FORCE_COLOR")?;
    match value {
        "" | "true" => Some(true),
        "false" => Some(false),
        _ => value.parse::<i64>().ok().map(|level| level >= 1),
    }
}

/// Merges the environment tri-state with `--color`/`--no-color` flags.
///
/// Flags are consulted only when `sniff_flags` is set and the environment
/// had no opinion. The negative flag wins over the positive one.
pub(crate) fn merged(snapshot: &Snapshot, sniff_flags: bool) -> Option<bool> {
    let from_env = from_env(snapshot);
    if !sniff_flags {
        return from_env;
    }

    from_env.or_else(|| {
        let args = snapshot.args();
        if has_flag(args, "no-color") || has_flag(args, "no-colors") {
            Some(false)
        } else if has_flag(args, "color") || has_flag(args, "colors") {
            Some(true)
        } else {
            None
        }
    })
}
