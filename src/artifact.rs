//! The versioned baseline artifact and its deterministic serialization.
//!
//! Artifacts are diffed across runs to spot regressions, so serialization
//! must be stable: keys come out in lexicographic order with fixed
//! indentation. Bump [`SCHEMA_VERSION`] on any field change.

use crate::error::{HarnessError, Result};
use crate::probes::HostInfo;
use crate::stats::Metrics;
use serde::Serialize;
use std::collections::BTreeMap;

/// Artifact schema version. Comparison tooling keys off this.
pub const SCHEMA_VERSION: u32 = 1;

/// Target binary descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryInfo {
    pub path: String,
    pub version_output: String,
    pub git_sha: Option<String>,
}

/// Toolchain descriptor (`rustc -vV` capture).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolchainInfo {
    pub version_output: String,
    pub host: Option<String>,
}

/// Measurement method descriptor. Makes the artifact self-documenting for
/// future comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInfo {
    pub mode: String,
    pub warmup: usize,
    pub runs: usize,
    pub timer: String,
    pub rss_method: String,
    pub notes: String,
}

impl MethodInfo {
    /// The method block for process-per-invocation timing.
    pub fn process(warmup: usize, runs: usize) -> Self {
        Self {
            mode: "process".to_owned(),
            warmup,
            runs,
            timer: "instant_monotonic".to_owned(),
            rss_method: "/usr/bin/time -v".to_owned(),
            notes: "Process-per-invocation timing. max_rss_kb measured via /usr/bin/time -v."
                .to_owned(),
        }
    }
}

/// Result record for one successfully-run case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    pub id: String,
    pub description: String,
    pub command: String,
    pub env: BTreeMap<String, String>,
    pub metrics: Metrics,
    /// Opaque decision trace from one explain invocation, when captured.
    pub trace: Option<serde_json::Value>,
}

/// The complete output document of one harness run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub schema_version: u32,
    /// UTC generation timestamp, `YYYY-MM-DDTHH:MM:SSZ`.
    pub generated_at: String,
    pub binary: BinaryInfo,
    pub rustc: ToolchainInfo,
    pub host: HostInfo,
    pub method: MethodInfo,
    pub cases: Vec<CaseResult>,
    pub errors: Vec<String>,
}

impl Artifact {
    /// Serialize with lexicographic key order and two-space indentation.
    ///
    /// Routing through `serde_json::Value` sorts every object's keys (the
    /// default map is a BTreeMap), so two artifacts with equal contents
    /// serialize byte-identically.
    pub fn to_canonical_json(&self) -> Result<String> {
        let value = serde_json::to_value(self)
            .map_err(|e| HarnessError::Artifact(format!("failed to encode artifact: {e}")))?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| HarnessError::Artifact(format!("failed to render artifact: {e}")))
    }
}
