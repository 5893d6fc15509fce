//! Harness configuration and command-line argument parsing.

use crate::error::{HarnessError, Result};
use std::path::PathBuf;

/// Default location of the release build of the target binary.
pub const DEFAULT_BIN: &str = "./target/release/dcg";

/// Default number of discarded warmup invocations per case.
pub const DEFAULT_WARMUP: usize = 30;

/// Default number of measured invocations per case.
pub const DEFAULT_RUNS: usize = 300;

/// Usage text for the `dcg-perf-baseline` binary.
pub const USAGE: &str = "\
usage: dcg-perf-baseline [options]

Generate a perf baseline JSON artifact for dcg.

options:
  --bin <path>      path to the dcg binary (default ./target/release/dcg)
  --output <path>   write JSON artifact to this file (default stdout)
  --warmup <n>      warmup iterations per case (default 30)
  --runs <n>        measured iterations per case (default 300)
  --skip-trace      skip explain trace capture
  --help            show this message";

/// Resolved harness configuration.
///
/// Built once from the command line; read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Path to the target binary under measurement.
    pub bin: PathBuf,
    /// Artifact output file. `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Warmup invocations per case (discarded).
    pub warmup: usize,
    /// Measured invocations per case (retained).
    pub runs: usize,
    /// Skip the explain-mode trace capture entirely.
    pub skip_trace: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            bin: PathBuf::from(DEFAULT_BIN),
            output: None,
            warmup: DEFAULT_WARMUP,
            runs: DEFAULT_RUNS,
            skip_trace: false,
        }
    }
}

/// Outcome of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Run the harness with the given configuration.
    Run(HarnessConfig),
    /// Print usage and exit cleanly.
    Help,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliAction> {
    let mut config = HarnessConfig::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--bin" => config.bin = PathBuf::from(required_value(&mut iter, "--bin")?),
            "--output" => {
                config.output = Some(PathBuf::from(required_value(&mut iter, "--output")?));
            }
            "--warmup" => config.warmup = parse_count(&required_value(&mut iter, "--warmup")?)?,
            "--runs" => config.runs = parse_count(&required_value(&mut iter, "--runs")?)?,
            "--skip-trace" => config.skip_trace = true,
            "--help" | "-h" => return Ok(CliAction::Help),
            other => {
                return Err(HarnessError::Config(format!(
                    "unknown argument `{other}` (see --help)"
                )));
            }
        }
    }

    Ok(CliAction::Run(config))
}

fn required_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<String> {
    iter.next()
        .map(String::clone)
        .ok_or_else(|| HarnessError::Config(format!("{flag} requires a value")))
}

fn parse_count(raw: &str) -> Result<usize> {
    raw.parse::<usize>()
        .map_err(|e| HarnessError::Config(format!("invalid count `{raw}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn defaults_with_no_args() {
        let action = parse_args(&[]).unwrap();
        let CliAction::Run(config) = action else {
            panic!("expected run action");
        };
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.warmup, 30);
        assert_eq!(config.runs, 300);
        assert!(!config.skip_trace);
        assert!(config.output.is_none());
    }

    #[test]
    fn all_flags_parse() {
        let action = parse_args(&args(&[
            "--bin",
            "/tmp/dcg",
            "--output",
            "out.json",
            "--warmup",
            "2",
            "--runs",
            "7",
            "--skip-trace",
        ]))
        .unwrap();
        let CliAction::Run(config) = action else {
            panic!("expected run action");
        };
        assert_eq!(config.bin, PathBuf::from("/tmp/dcg"));
        assert_eq!(config.output, Some(PathBuf::from("out.json")));
        assert_eq!(config.warmup, 2);
        assert_eq!(config.runs, 7);
        assert!(config.skip_trace);
    }

    #[test]
    fn help_flag_wins() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), CliAction::Help);
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), CliAction::Help);
    }

    #[test]
    fn missing_value_is_config_error() {
        let err = parse_args(&args(&["--warmup"])).unwrap_err();
        assert!(err.to_string().contains("--warmup requires a value"));
    }

    #[test]
    fn non_numeric_count_is_config_error() {
        let err = parse_args(&args(&["--runs", "many"])).unwrap_err();
        assert!(err.to_string().contains("invalid count"));
    }

    #[test]
    fn unknown_flag_is_config_error() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument"));
    }
}
