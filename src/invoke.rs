//! Single timed invocation of the target binary.
//!
//! The target is a Claude Code style hook: it reads one JSON payload from
//! stdin and exits. Timing spans launch to exit on a monotonic clock; the
//! payload is serialized before the clock starts.

use crate::error::{HarnessError, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Build the hook payload fed to the target's stdin.
///
/// Shape: `{"tool_name":"Bash","tool_input":{"command":<command>}}`.
pub(crate) fn hook_payload(command: &str) -> Vec<u8> {
    serde_json::json!({
        "tool_name": "Bash",
        "tool_input": { "command": command },
    })
    .to_string()
    .into_bytes()
}

/// Run the target binary once and return elapsed wall-clock milliseconds.
///
/// stdout/stderr are discarded and the exit status is deliberately not
/// inspected: a deny decision exits non-zero and is still a valid latency
/// sample. Only failure to launch the process propagates as an error.
pub fn run_once(bin: &Path, command: &str, env: &BTreeMap<String, String>) -> Result<f64> {
    let payload = hook_payload(command);

    let start = Instant::now();
    let mut child = Command::new(bin)
        .env_clear()
        .envs(env)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            HarnessError::Spawn(format!("failed to spawn {}: {e}", bin.display()))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // The target may exit before reading all of stdin; a broken pipe
        // here is not a measurement failure.
        let _ = stdin.write_all(&payload);
    }

    child.wait().map_err(|e| {
        HarnessError::Spawn(format!("failed to wait on {}: {e}", bin.display()))
    })?;

    Ok(start.elapsed().as_secs_f64() * 1000.0)
}
