//! Snapshot-keyed co-occurrence graphs.
//!
//! Groups of members observed together in one snapshot (a film's cast, a
//! publication's author list) expand into all directed pairs between
//! distinct members of the group. Both directions of every pair are
//! recorded, since co-occurrence is inherently undirected.

use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

/// Accumulates co-occurrence groups and emits canonical triples.
///
/// Snapshot keys and member names are kept sorted, so the emitted edge
/// stream is deterministic for a fixed input.
#[derive(Debug, Default)]
pub struct Cooccurrence {
    snapshots: BTreeMap<u64, BTreeMap<String, BTreeSet<String>>>,
}

impl Cooccurrence {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `members` appeared together in `snapshot`.
    ///
    /// Every member becomes adjacent to every other member of the group;
    /// self-loops are never recorded. Groups repeated within a snapshot
    /// merge without duplicating edges.
    pub fn add_group<S: AsRef<str>>(&mut self, snapshot: u64, members: &[S]) {
        let graph = self.snapshots.entry(snapshot).or_default();
        for a in members {
            let a = a.as_ref();
            let neighbors = graph.entry(a.to_string()).or_default();
            for b in members {
                let b = b.as_ref();
                if b != a {
                    neighbors.insert(b.to_string());
                }
            }
        }
    }

    /// Number of snapshots seen so far.
    pub fn num_snapshots(&self) -> usize {
        self.snapshots.len()
    }

    /// Total number of directed edges across all snapshots.
    pub fn num_edges(&self) -> usize {
        self.snapshots
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeSet::len)
            .sum()
    }

    /// Write `source,target,snapshot` lines: snapshots ascending, then
    /// sources, then targets. Returns the number of lines written.
    pub fn write_triples<W: Write>(&self, mut out: W) -> Result<usize> {
        let mut lines = 0;
        for (snapshot, graph) in &self.snapshots {
            for (source, neighbors) in graph {
                for target in neighbors {
                    writeln!(out, "{},{},{}", source, target, snapshot)?;
                    lines += 1;
                }
            }
        }
        out.flush()?;

        Ok(lines)
    }
}
