//! Scanning the argument list for `--` flags.

/// Whether `--{name}` appears in `args` before any `--` terminator.
///
/// `name` is given without the leading dashes. Tokens after a bare `--`
/// belong to whatever the tool passes through, not to the tool itself, so
/// they never count.
pub(crate) fn has_flag(args: &[String], name: &str) -> bool {
    let terminator = args.iter().position(|arg| arg == "--");

    args.iter()
        .position(|arg| arg.strip_prefix("--") == Some(name))
        .is_some_and(|position| terminator.is_none_or(|t| position < t))
}
