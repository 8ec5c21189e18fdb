use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    sizes::{self, SizesArgs},
    validate::{self, ValidateArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::{prelude::*, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "symtrx-sim", about = "Compressed symmetric matrix kernels CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cross-validate compressed kernels against the dense oracle.
    Validate(ValidateArgs),
    /// Print storage sizes and gains for a range of dimensions.
    Sizes(SizesArgs),
    /// Print the package version.
    Version(VersionArgs),
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Validate(args) => validate::run(&args),
        Command::Sizes(args) => sizes::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
