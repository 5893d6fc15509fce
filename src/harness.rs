//! Harness driver: case iteration, failure isolation, artifact assembly.

use crate::artifact::{Artifact, BinaryInfo, CaseResult, MethodInfo, SCHEMA_VERSION, ToolchainInfo};
use crate::cases::{Case, builtin_cases};
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::probes::{self, HostInfo};
use crate::runner::{self, RunPlan};
use std::collections::BTreeMap;

/// Run the full fixed catalog and assemble the baseline artifact.
///
/// Fatal only when the target binary path does not resolve to a regular
/// file. Individual case failures are recorded in the artifact's error list
/// and never abort the run.
pub fn run(config: &HarnessConfig) -> Result<Artifact> {
    if !config.bin.is_file() {
        return Err(HarnessError::Config(format!(
            "binary not found: {}",
            config.bin.display()
        )));
    }
    run_catalog(config, &builtin_cases())
}

/// Run an explicit case catalog. [`run`] passes the builtin five; tests
/// inject their own.
pub fn run_catalog(config: &HarnessConfig, catalog: &[Case]) -> Result<Artifact> {
    let version_output = probes::binary_version(&config.bin);
    let (rustc_output, rustc_host) = probes::rustc_version();
    let git_sha = probes::git_sha();

    // Snapshot of the inherited environment. Each case gets its own copy so
    // overrides never leak into the next case.
    let base_env: BTreeMap<String, String> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();

    let plan = RunPlan {
        warmup: config.warmup,
        runs: config.runs,
        measure_rss: true,
        skip_trace: config.skip_trace,
    };

    let mut cases: Vec<CaseResult> = Vec::with_capacity(catalog.len());
    let mut errors: Vec<String> = Vec::new();

    for case in catalog {
        let mut env = base_env.clone();
        env.extend(case.env.clone());

        tracing::debug!(case = %case.id, command = %case.command, "running case");
        match runner::run_case(&config.bin, case, &env, plan) {
            Ok(result) => {
                tracing::info!(
                    case = %case.id,
                    p50_ms = result.metrics.p50_ms,
                    mean_ms = result.metrics.mean_ms,
                    "case complete"
                );
                cases.push(result);
            }
            Err(e) => {
                tracing::warn!(case = %case.id, error = %e, "case failed");
                errors.push(format!("{}: {e}", case.id));
            }
        }
    }

    Ok(Artifact {
        schema_version: SCHEMA_VERSION,
        generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        binary: BinaryInfo {
            path: config.bin.display().to_string(),
            version_output,
            git_sha,
        },
        rustc: ToolchainInfo {
            version_output: rustc_output,
            host: rustc_host,
        },
        host: HostInfo::detect(),
        method: MethodInfo::process(config.warmup, config.runs),
        cases,
        errors,
    })
}
