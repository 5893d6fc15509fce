//! Per-case orchestration: warmup, measurement, memory and trace capture.

use crate::artifact::CaseResult;
use crate::cases::Case;
use crate::error::Result;
use crate::stats::Metrics;
use crate::{invoke, memory, trace};
use std::collections::BTreeMap;
use std::path::Path;

/// Per-case execution knobs, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    /// Discarded warmup invocations (absorbs cold-start effects).
    pub warmup: usize,
    /// Measured invocations retained in the sample set.
    pub runs: usize,
    /// Take the one post-warmup peak-RSS sample.
    pub measure_rss: bool,
    /// Skip the explain trace capture.
    pub skip_trace: bool,
}

/// Run one case end to end and produce its result record.
///
/// `env` is the fully resolved environment (inherited + case overrides).
/// Errors from the timing loop propagate so the driver can record them at
/// its per-case boundary; memory and trace capture are best-effort and only
/// surface as missing data.
pub fn run_case(
    bin: &Path,
    case: &Case,
    env: &BTreeMap<String, String>,
    plan: RunPlan,
) -> Result<CaseResult> {
    for _ in 0..plan.warmup {
        invoke::run_once(bin, &case.command, env)?;
    }

    let mut samples = Vec::with_capacity(plan.runs);
    for _ in 0..plan.runs {
        samples.push(invoke::run_once(bin, &case.command, env)?);
    }

    let mut metrics = Metrics::from_samples(&samples);

    // One memory sample per case, after warmup. RSS is assumed stable across
    // repeated invocations of the same command, and time(1) wrapping is too
    // expensive to run per sample.
    if plan.measure_rss {
        metrics.max_rss_kb = memory::sample_max_rss_kb(bin, &case.command, env);
    }

    let trace = if plan.skip_trace {
        None
    } else {
        trace::capture_trace(bin, &case.command)
    };

    Ok(CaseResult {
        id: case.id.clone(),
        description: case.description.clone(),
        command: case.command.clone(),
        env: case.env.clone(),
        metrics,
        trace,
    })
}
