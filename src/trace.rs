//! Explain-mode trace capture.
//!
//! Runs the target in its `explain` diagnostic sub-mode with tracing enabled
//! and extracts the nested `trace` object from its JSON output. Diagnostic
//! invocations are never part of the latency sample set.

use std::path::Path;
use std::process::{Command, Stdio};

/// Environment flag that switches the target's explain mode into full trace
/// collection.
const TRACE_ENV: &str = "DCG_TRACE";

/// Capture the decision trace for one command, best-effort.
///
/// Returns `None` on non-zero exit, unparseable output, or a missing/null
/// `trace` field. The inherited environment is kept (the explain mode needs
/// the caller's PATH and config), with only the trace flag added.
pub fn capture_trace(bin: &Path, command: &str) -> Option<serde_json::Value> {
    let output = Command::new(bin)
        .args(["explain", command, "--format", "json"])
        .env(TRACE_ENV, "1")
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        tracing::debug!(bin = %bin.display(), "explain invocation exited non-zero");
        return None;
    }

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).ok()?;
    match payload.get("trace") {
        None | Some(serde_json::Value::Null) => None,
        Some(trace) => Some(trace.clone()),
    }
}
