//! Peak resident memory sampling via an external accounting wrapper.
//!
//! Wraps the target binary in GNU `/usr/bin/time -v` and scrapes the
//! `Maximum resident set size` line from the wrapper's stderr. The wrapper's
//! output format is not guaranteed stable, so parsing lives behind this
//! module boundary and every failure mode degrades to `None`.

use crate::invoke::hook_payload;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// GNU time binary. The shell builtin lacks `-v`, so the absolute path is
/// deliberate.
const TIME_BIN: &str = "/usr/bin/time";

/// Measure peak RSS of one target invocation, in kilobytes.
///
/// Best-effort: a missing wrapper, an unrecognized output format, or any
/// process failure returns `None` and never errors the case.
pub fn sample_max_rss_kb(
    bin: &Path,
    command: &str,
    env: &BTreeMap<String, String>,
) -> Option<u64> {
    let payload = hook_payload(command);

    let mut child = Command::new(TIME_BIN)
        .arg("-v")
        .arg(bin)
        .env_clear()
        .envs(env)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .ok()?;

    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(&payload);
    }

    let output = child.wait_with_output().ok()?;
    let rss = parse_max_rss(&String::from_utf8_lossy(&output.stderr));
    if rss.is_none() {
        tracing::debug!(bin = %bin.display(), "no max RSS line in time(1) output");
    }
    rss
}

/// Extract the `Maximum resident set size (kbytes): N` value from time(1)
/// verbose output. Returns `None` when the marker line is absent or the
/// numeric field does not parse.
pub(crate) fn parse_max_rss(diagnostics: &str) -> Option<u64> {
    for line in diagnostics.lines() {
        if line.contains("Maximum resident set size")
            && let Some((_, value)) = line.split_once(':')
        {
            return value.trim().parse().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_time_output() {
        let diagnostics = "\
\tUser time (seconds): 0.00
\tMaximum resident set size (kbytes): 4096
\tExit status: 0";
        assert_eq!(parse_max_rss(diagnostics), Some(4096));
    }

    #[test]
    fn missing_marker_yields_none() {
        assert_eq!(parse_max_rss("User time (seconds): 0.00"), None);
        assert_eq!(parse_max_rss(""), None);
    }

    #[test]
    fn non_numeric_field_yields_none() {
        assert_eq!(
            parse_max_rss("Maximum resident set size (kbytes): lots"),
            None
        );
    }

    #[test]
    fn marker_without_colon_yields_none() {
        assert_eq!(parse_max_rss("Maximum resident set size 4096"), None);
    }
}
