use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::algorithm::Component;
use crate::graph::Graph;

/// Which columns of an edge table to read, by header name.
#[derive(Debug, Clone)]
pub struct EdgeColumns {
    pub from: String,
    pub to: String,
    /// Numeric filter: rows whose value in the named column is below the
    /// threshold are dropped before the edge reaches the graph.
    pub filter: Option<(String, f64)>,
}

/// Reads a TSV edge table with a header row and builds the co-expression
/// graph from the two label columns of every surviving row.
///
/// Column names are resolved against the header; a missing column, a
/// non-numeric filter value, or a ragged row aborts the read, since
/// skipping rows would silently change the resulting partition.
pub fn read_edge_table<R: io::Read>(reader: R, columns: &EdgeColumns) -> Result<Graph> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers().context("could not read header row")?.clone();
    let from_idx = column_index(&headers, &columns.from)?;
    let to_idx = column_index(&headers, &columns.to)?;
    let filter = match &columns.filter {
        Some((name, min)) => Some((column_index(&headers, name)?, *min)),
        None => None,
    };

    let mut graph = Graph::new();
    let mut kept = 0u64;
    let mut dropped = 0u64;

    for (row, record) in rdr.records().enumerate() {
        // header is line 1, first record line 2
        let line = row + 2;
        let record = record.with_context(|| format!("could not read line {}", line))?;

        if let Some((idx, min)) = filter {
            let raw = field(&record, idx, line)?;
            let value: f64 = raw.parse().with_context(|| {
                format!("line {}: filter value {:?} is not numeric", line, raw)
            })?;
            if value < min {
                dropped += 1;
                continue;
            }
        }

        let from = field(&record, from_idx, line)?;
        let to = field(&record, to_idx, line)?;
        graph.add_edge(from, to);
        kept += 1;
    }

    log::info!(
        "read {} edges ({} dropped by filter), {} nodes",
        kept,
        dropped,
        graph.len()
    );

    Ok(graph)
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .with_context(|| format!("column {:?} not found in header", name))
}

fn field<'r>(record: &'r StringRecord, idx: usize, line: usize) -> Result<&'r str> {
    record
        .get(idx)
        .with_context(|| format!("line {} has no column {}", line, idx + 1))
}

/// Sorts `components` largest-first (equal sizes keep their discovery
/// order) and writes each as one line of lexicographically sorted,
/// tab-separated labels.
pub fn write_modules<W: Write>(out: W, mut components: Vec<Component>) -> Result<()> {
    components.sort_by_key(|component| std::cmp::Reverse(component.len()));

    let mut out = BufWriter::new(out);
    for mut component in components {
        component.sort();
        writeln!(out, "{}", component.join("\t"))?;
    }
    out.flush()?;

    Ok(())
}

/// Copies a TSV from `input` to `out`, dropping every column whose header
/// name appears in `drop`. Names not present in the header are ignored;
/// the remaining columns keep their relative order.
pub fn strip_columns<R: io::Read, W: Write>(input: R, out: W, drop: &[String]) -> Result<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(input);
    let mut wtr = csv::WriterBuilder::new().delimiter(b'\t').from_writer(out);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(header) => header.context("could not read header row")?,
        None => return Ok(()),
    };
    let kept: Vec<usize> = header
        .iter()
        .enumerate()
        .filter(|(_, name)| !drop.iter().any(|dropped| dropped == name))
        .map(|(idx, _)| idx)
        .collect();
    log::info!("keeping {} of {} columns", kept.len(), header.len());

    write_kept(&mut wtr, &header, &kept)?;
    for (row, record) in records.enumerate() {
        let record = record.with_context(|| format!("could not read line {}", row + 2))?;
        write_kept(&mut wtr, &record, &kept)?;
    }
    wtr.flush()?;

    Ok(())
}

fn write_kept<W: Write>(
    wtr: &mut csv::Writer<W>,
    record: &StringRecord,
    kept: &[usize],
) -> Result<()> {
    let fields = kept.iter().filter_map(|&idx| record.get(idx));
    wtr.write_record(fields)?;
    Ok(())
}

/// Opens `path` for writing, or stdout when no path is given.
pub fn output_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
