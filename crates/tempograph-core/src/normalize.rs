//! Id space normalization.
//!
//! Adapters emit edges keyed by raw strings (author names, page ids) and
//! raw timestamps (years, compacted dates). The core pipeline demands dense
//! zero-based integer ids for both; normalization establishes that property
//! with two streaming passes, never buffering the file body.
//!
//! Vertex ids are assigned in order of first appearance; timestamps are
//! ranked ascending so snapshot ids preserve chronology. Both mappings are
//! deterministic for a fixed input, and the output always satisfies the id
//! space validator.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Extension appended to the input path when no output path is given.
pub const NORMALIZED_EXT: &str = "sim";

/// Summary of a normalization run.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeReport {
    /// Number of distinct vertices; mapped ids are `0..num_vertices`.
    pub num_vertices: usize,
    /// Number of distinct snapshots; mapped ids are `0..num_snapshots`.
    pub num_snapshots: usize,
    /// Number of lines rewritten.
    pub num_edges: usize,
    /// Where the normalized file was written.
    pub output: PathBuf,
}

/// Rewrite a canonical triple file with dense zero-based ids.
///
/// The output path defaults to `<input>.sim`. Duplicate edges pass through
/// untouched; rejecting them is the loader's job downstream.
pub fn normalize_file(input: &Path, output: Option<&Path>) -> Result<NormalizeReport> {
    let output = output.map_or_else(
        || crate::pipeline::append_extension(input, NORMALIZED_EXT),
        Path::to_path_buf,
    );

    // Pass 1: id discovery.
    let mut vertex_ids: HashMap<String, u32> = HashMap::new();
    let mut timestamps: BTreeSet<u64> = BTreeSet::new();
    let mut num_edges = 0usize;

    for_each_triple(input, |src, dst, time| {
        assign_id(&mut vertex_ids, src);
        assign_id(&mut vertex_ids, dst);
        timestamps.insert(time);
        num_edges += 1;
        Ok(())
    })?;

    let snapshot_ids: HashMap<u64, u32> = timestamps
        .iter()
        .enumerate()
        .map(|(rank, &t)| (t, rank as u32))
        .collect();

    tracing::info!(
        vertices = vertex_ids.len(),
        snapshots = snapshot_ids.len(),
        edges = num_edges,
        "id spaces collected"
    );

    // Pass 2: rewrite.
    let mut out = BufWriter::new(File::create(&output)?);
    for_each_triple(input, |src, dst, time| {
        writeln!(
            out,
            "{},{},{}",
            vertex_ids[src], vertex_ids[dst], snapshot_ids[&time]
        )?;
        Ok(())
    })?;
    out.flush()?;

    Ok(NormalizeReport {
        num_vertices: vertex_ids.len(),
        num_snapshots: snapshot_ids.len(),
        num_edges,
        output,
    })
}

fn assign_id(ids: &mut HashMap<String, u32>, key: &str) {
    let next = ids.len() as u32;
    ids.entry(key.to_string()).or_insert(next);
}

/// Stream `source,target,timestamp` lines, skipping blanks and comments.
/// Source and target may be arbitrary non-empty strings; the timestamp must
/// parse as a non-negative integer.
fn for_each_triple<F>(path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&str, &str, u64) -> Result<()>,
{
    let reader = BufReader::new(File::open(path)?);
    let mut line_no: u64 = 0;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts.len() != 3 {
            return Err(Error::Format {
                line: line_no,
                expected: 3,
                found: parts.len(),
            });
        }

        let time: u64 = parts[2].parse().map_err(|source| Error::Parse {
            line: line_no,
            field: parts[2].to_string(),
            source,
        })?;

        visit(parts[0], parts[1], time)?;
    }

    Ok(())
}
