//! dcg-perf: performance-baseline harness for the dcg command-safety hook.
//!
//! Drives the external `dcg` binary through a fixed catalog of
//! representative hook invocations, measures per-invocation latency and peak
//! memory, and emits a versioned JSON artifact with build and environment
//! metadata. Regressions are found by diffing artifacts across runs.
//!
//! # Architecture
//!
//! The pipeline is strictly sequential — concurrent invocations would
//! contend for CPU cache and scheduler time and contaminate the latency
//! numbers:
//! - **Invoker** (`invoke`): one timed subprocess launch per sample
//! - **Percentile engine** (`stats`): nearest-rank percentiles over the
//!   sorted sample set
//! - **Memory sampler** (`memory`): peak RSS via `/usr/bin/time -v`
//! - **Trace capturer** (`trace`): explain-mode decision traces
//! - **Metadata probes** (`probes`): binary/rustc/git/host descriptors
//! - **Driver** (`harness`): case iteration, failure isolation, artifact
//!   assembly

pub mod artifact;
pub mod cases;
pub mod config;
pub mod error;
pub mod harness;
pub mod invoke;
pub mod memory;
pub mod probes;
pub mod runner;
pub mod stats;
pub mod trace;

pub use config::HarnessConfig;
pub use error::{HarnessError, Result};
