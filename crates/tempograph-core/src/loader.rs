//! Canonical edge loading.
//!
//! Streams a `source,target,timestamp` file in one forward pass,
//! accumulating the distinct vertex and snapshot id sets and a per-source
//! map from target to insertion timestamp. The pass never buffers the file
//! body, so memory stays proportional to the graph, not the input.

use crate::edge::{Timestamp, VertexId};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How often the streaming pass reports progress, in input lines.
const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Accumulated state of one streaming pass over a canonical edge file.
///
/// This is the provisional, map-keyed form of the graph; it exists only to
/// feed validation and [`CondensedGraph`](crate::CondensedGraph)
/// construction.
#[derive(Debug, Default)]
pub struct EdgeList {
    adjacency: HashMap<VertexId, HashMap<VertexId, Timestamp>>,
    pub(crate) vertices: HashSet<VertexId>,
    pub(crate) snapshots: HashSet<Timestamp>,
    num_edges: usize,
}

impl EdgeList {
    /// Stream a canonical edge file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Stream canonical edges from any buffered reader.
    ///
    /// Blank lines and lines starting with `#` or `%` are skipped. Every
    /// other line must be exactly `source,target,timestamp` with
    /// non-negative integer fields. A repeated ordered `(source, target)`
    /// pair is fatal.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = Self::default();
        let mut line_no: u64 = 0;

        for line in reader.lines() {
            let line = line?;
            line_no += 1;

            if line_no % PROGRESS_INTERVAL == 0 {
                tracing::debug!(line = line_no, "reading");
            }

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
                continue;
            }

            let (src, dst, time) = parse_triple(trimmed, line_no)?;
            list.insert(src, dst, time)?;
        }

        tracing::info!(
            edges = list.num_edges,
            vertices = list.vertices.len(),
            snapshots = list.snapshots.len(),
            "edge list loaded"
        );

        Ok(list)
    }

    fn insert(&mut self, src: VertexId, dst: VertexId, time: Timestamp) -> Result<()> {
        self.vertices.insert(src);
        self.vertices.insert(dst);
        self.snapshots.insert(time);

        let outgoing = self.adjacency.entry(src).or_default();
        if let Some(&first) = outgoing.get(&dst) {
            return Err(Error::DuplicateEdge {
                src,
                dst,
                first,
                second: time,
            });
        }
        outgoing.insert(dst, time);
        self.num_edges += 1;

        Ok(())
    }

    /// Number of accepted edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Number of distinct vertex ids seen.
    pub fn num_vertices_seen(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct snapshot ids seen.
    pub fn num_snapshots_seen(&self) -> usize {
        self.snapshots.len()
    }

    /// Consume the list, yielding the per-source adjacency map.
    pub(crate) fn into_adjacency(self) -> HashMap<VertexId, HashMap<VertexId, Timestamp>> {
        self.adjacency
    }
}

fn parse_triple(line: &str, line_no: u64) -> Result<(VertexId, VertexId, Timestamp)> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 3 {
        return Err(Error::Format {
            line: line_no,
            expected: 3,
            found: parts.len(),
        });
    }

    let src = parse_field(parts[0], line_no)?;
    let dst = parse_field(parts[1], line_no)?;
    let time = parse_field(parts[2], line_no)?;

    Ok((src, dst, time))
}

fn parse_field(field: &str, line: u64) -> Result<u32> {
    field.parse().map_err(|source| Error::Parse {
        line,
        field: field.to_string(),
        source,
    })
}
