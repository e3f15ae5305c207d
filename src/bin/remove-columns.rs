use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use coexp_modules::table;

/// Removes named columns from a TSV table and writes the rest to stdout.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input table with a header row
    input: PathBuf,
    /// Name of a column to drop; may be repeated
    #[arg(long = "columns")]
    columns: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input = File::open(&args.input)
        .with_context(|| format!("could not open {}", args.input.display()))?;

    table::strip_columns(input, io::stdout().lock(), &args.columns)
}
