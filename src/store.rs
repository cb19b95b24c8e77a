//! Cache sink for aggregation results.
//!
//! Persisting a result is an explicit step the caller takes after the rollup
//! returns, never a side effect of aggregation. The file is the result's
//! plain JSON form, reloaded verbatim, so a cached run substitutes for
//! recomputation. A failed save must not invalidate the in-memory result;
//! callers report it as a warning and keep going.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::rollup::AggregationResult;

pub fn save(result: &AggregationResult, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Creating cache file {path:?}"))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, result)
        .with_context(|| format!("Writing cached result to {path:?}"))?;
    writer
        .flush()
        .with_context(|| format!("Flushing cached result to {path:?}"))?;
    Ok(())
}

pub fn load(path: &Path) -> Result<AggregationResult> {
    let file = File::open(path).with_context(|| format!("Opening cache file {path:?}"))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Parsing cached result from {path:?}"))
}
