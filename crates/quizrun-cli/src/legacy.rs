//! Single-dash long flags.
//!
//! Older quiz scripts invoke the tool as `quizrun -file problems.csv -time 10
//! -shuffle`. clap would read `-file` as `-f ile`, so these spellings are
//! rewritten to their double-dash forms before parsing.

use std::ffi::OsString;

const LONG_FLAGS: &[&str] = &["file", "time", "shuffle", "help"];

/// Rewrite `-name` and `-name=value` to `--name...` for known long flags.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_long_flag(rest) => {
                    OsString::from(format!("--{rest}"))
                }
                _ => arg,
            }
        })
        .collect()
}

fn is_long_flag(rest: &str) -> bool {
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
