use std::error::Error;

use clap::Args;
use serde::Serialize;
use symtrx_bisym::bisym_size;
use symtrx_centro::storage_len;
use symtrx_exp::to_canonical_json_bytes;

#[derive(Args, Debug)]
pub struct SizesArgs {
    /// Largest dimension to list.
    #[arg(long, default_value_t = 8)]
    pub max_dim: usize,
}

#[derive(Debug, Serialize)]
struct SizeRow {
    dim: usize,
    full: usize,
    centrosymmetric: usize,
    bisymmetric: usize,
    centrosymmetric_gain: f64,
    bisymmetric_gain: f64,
}

fn size_rows(max_dim: usize) -> Vec<SizeRow> {
    (1..=max_dim)
        .map(|dim| SizeRow {
            dim,
            full: dim * dim,
            centrosymmetric: storage_len(dim),
            bisymmetric: bisym_size(dim),
            centrosymmetric_gain: symtrx_centro::storage_gain(dim),
            bisymmetric_gain: symtrx_bisym::storage_gain(dim),
        })
        .collect()
}

pub fn run(args: &SizesArgs) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(&size_rows(args.max_dim))?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
