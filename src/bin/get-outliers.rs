use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use coexp_modules::report::OutlierReport;

/// Prints the samples an array QC report flags as outliers, one per line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON quality report with a per-sample "counts" object
    json: PathBuf,
    /// Number of methods required to consider a sample an outlier
    #[arg(long)]
    counts: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input = File::open(&args.json)
        .with_context(|| format!("could not open {}", args.json.display()))?;
    let report = OutlierReport::from_reader(BufReader::new(input))?;

    let outliers = report.outliers(args.counts)?;
    log::info!("{} outlier samples", outliers.len());

    let mut out = io::stdout().lock();
    for sample in outliers {
        writeln!(out, "{}", sample)?;
    }

    Ok(())
}
