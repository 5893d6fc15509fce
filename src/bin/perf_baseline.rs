//! Generate a perf baseline JSON artifact for the dcg hook binary.
//!
//! All tracing output goes to stderr so that stdout stays clean for the
//! artifact JSON when no `--output` file is given.

use dcg_perf::config::{self, CliAction};
use std::io::Write;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("dcg-perf-baseline failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> dcg_perf::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match config::parse_args(&args)? {
        CliAction::Help => {
            println!("{}", config::USAGE);
            return Ok(());
        }
        CliAction::Run(config) => config,
    };

    let artifact = dcg_perf::harness::run(&config)?;
    let json = artifact.to_canonical_json()?;

    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let mut file = std::fs::File::create(path)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            tracing::info!(path = %path.display(), "baseline artifact written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
