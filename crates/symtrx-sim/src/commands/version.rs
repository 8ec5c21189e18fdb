use std::error::Error;

use clap::Args;
use serde::Serialize;
use symtrx_exp::to_canonical_json_bytes;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the versions of the kernel crates as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    index_schemes: Vec<&'static str>,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        index_schemes: vec![
            <symtrx_centro::RowMajor as symtrx_centro::IndexScheme>::NAME,
            <symtrx_centro::DiagonalMajor as symtrx_centro::IndexScheme>::NAME,
        ],
    };
    let json = to_canonical_json_bytes(&info)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
