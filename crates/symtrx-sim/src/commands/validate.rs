use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use symtrx_exp::{run as run_harness, to_canonical_json_bytes, HarnessConfig};
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// YAML harness configuration; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Dimensions to test, overriding the configuration.
    #[arg(long, num_args = 1..)]
    pub dims: Vec<usize>,
    /// Trials per dimension and kind, overriding the configuration.
    #[arg(long)]
    pub repeats: Option<usize>,
    /// Master seed, overriding the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write the canonical JSON report to this path as well.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Exit with an error when any check failed.
    #[arg(long)]
    pub strict: bool,
}

fn resolve_config(args: &ValidateArgs) -> Result<HarnessConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };
    if !args.dims.is_empty() {
        config.dims = args.dims.clone();
    }
    if let Some(repeats) = args.repeats {
        config.repeats = repeats;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

pub fn run(args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let report = run_harness(&config)?;
    let json = String::from_utf8(to_canonical_json_bytes(&report)?)?;
    if let Some(path) = &args.out {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &json)?;
        info!(path = %path.display(), "report written");
    }
    println!("{json}");
    if !report.is_clean() {
        warn!(total_failures = report.total_failures, "some checks failed");
        if args.strict {
            return Err(format!("{} cross-validation checks failed", report.total_failures).into());
        }
    }
    Ok(())
}
