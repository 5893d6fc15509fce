//! Best-effort build and environment metadata probes.
//!
//! Each probe runs at most once per harness run and tolerates total failure:
//! a missing tool or empty output becomes a placeholder or `None`, never an
//! error. Output scraping (`rustc -vV`, `uname`) stays inside this module so
//! format drift is a one-module change.

use std::path::Path;
use std::process::Command;

/// Capture the target binary's `--version` output.
///
/// stdout and stderr are concatenated: some builds print the version banner
/// to stderr. A failed probe yields an `error: ...` placeholder string.
pub fn binary_version(bin: &Path) -> String {
    match Command::new(bin).arg("--version").output() {
        Ok(output) => {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            text.trim().to_owned()
        }
        Err(e) => format!("error: {e}"),
    }
}

/// Capture `rustc -vV` output and the host triple from its `host:` line.
pub fn rustc_version() -> (String, Option<String>) {
    match Command::new("rustc").arg("-vV").output() {
        Ok(output) => {
            let text = String::from_utf8_lossy(&output.stdout).trim().to_owned();
            let host = text.lines().find_map(|line| {
                line.strip_prefix("host:").map(|rest| rest.trim().to_owned())
            });
            (text, host)
        }
        Err(e) => (format!("error: {e}"), None),
    }
}

/// Capture the current git commit. Empty output (not a repository, detached
/// state) is `None`, not an error.
pub fn git_sha() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    let sha = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    if sha.is_empty() { None } else { Some(sha) }
}

/// Host platform descriptor recorded in the artifact.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HostInfo {
    pub os: String,
    pub release: String,
    pub arch: String,
}

impl HostInfo {
    /// Detect the current host. Kernel release comes from `uname -r` and
    /// falls back to an empty string off Unix or when the probe fails.
    pub fn detect() -> Self {
        Self {
            os: std::env::consts::OS.to_owned(),
            release: kernel_release().unwrap_or_default(),
            arch: std::env::consts::ARCH.to_owned(),
        }
    }
}

fn kernel_release() -> Option<String> {
    let output = Command::new("uname").arg("-r").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let release = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    if release.is_empty() { None } else { Some(release) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_version_probe_degrades_to_placeholder() {
        let text = binary_version(Path::new("/nonexistent/dcg-probe-test"));
        assert!(text.starts_with("error: "));
    }

    #[test]
    fn host_info_uses_compile_time_os_and_arch() {
        let host = HostInfo::detect();
        assert_eq!(host.os, std::env::consts::OS);
        assert_eq!(host.arch, std::env::consts::ARCH);
    }
}
