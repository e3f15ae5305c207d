use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use coexp_modules::find_components;
use coexp_modules::table::{self, EdgeColumns};

/// Finds modules (connected components) in an undirected graph represented
/// by an adjacency list in a TSV table. Writes one module per line as
/// tab-separated labels, largest module first.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Edge table with a header row
    #[arg(long)]
    input: PathBuf,
    /// Column containing a node label (from)
    #[arg(long)]
    from_col: String,
    /// Column containing a node label (to)
    #[arg(long)]
    to_col: String,
    /// Write modules here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Numeric column to filter relations on
    #[arg(long, requires = "filter_val")]
    filter_col: Option<String>,
    /// Rows whose filter column is below this value are not considered
    #[arg(long, requires = "filter_col")]
    filter_val: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input = File::open(&args.input)
        .with_context(|| format!("could not open {}", args.input.display()))?;
    let columns = EdgeColumns {
        from: args.from_col,
        to: args.to_col,
        filter: args.filter_col.zip(args.filter_val),
    };

    let graph = table::read_edge_table(input, &columns)?;
    let modules = find_components(&graph);
    log::info!("{} modules", modules.len());

    let out = table::output_writer(args.output.as_deref())?;
    table::write_modules(out, modules)
}
