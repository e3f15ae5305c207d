use std::collections::BTreeMap;
use std::io;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Quality report produced by the array QC step: how many detection
/// methods flagged each sample as an outlier.
#[derive(Debug, Deserialize)]
pub struct OutlierReport {
    counts: BTreeMap<String, Count>,
}

/// A count as it appears in the report. Older reports carry numeric
/// strings instead of numbers, so both forms are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u32),
    Text(String),
}

impl Count {
    fn value(&self) -> Result<u32> {
        match self {
            Count::Number(count) => Ok(*count),
            Count::Text(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("count {:?} is not an integer", raw)),
        }
    }
}

impl OutlierReport {
    pub fn from_reader<R: io::Read>(reader: R) -> Result<OutlierReport> {
        serde_json::from_reader(reader).context("could not decode outlier report")
    }

    /// Names of the samples flagged by at least `min_count` methods,
    /// sorted by name.
    pub fn outliers(&self, min_count: u32) -> Result<Vec<&str>> {
        let mut flagged = Vec::new();
        for (sample, count) in &self.counts {
            let count = count
                .value()
                .with_context(|| format!("sample {:?}", sample))?;
            if count >= min_count {
                flagged.push(sample.as_str());
            }
        }
        Ok(flagged)
    }
}
