//! Canonical TEG serialization.

use crate::error::Result;
use crate::graph::CondensedGraph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one `source,target,start,end` line per edge.
///
/// Sources are emitted ascending and targets ascending within a source,
/// matching the builder's arena order. Returns the number of lines written,
/// which equals the graph's edge count. The stream is flushed before
/// returning.
pub fn write_teg<W: Write>(graph: &CondensedGraph, mut out: W) -> Result<usize> {
    let mut lines = 0;
    for (src, edge) in graph.iter() {
        writeln!(out, "{},{},{},{}", src, edge.dst, edge.start, edge.end)?;
        lines += 1;
    }
    out.flush()?;

    Ok(lines)
}

/// Write the graph to a file, buffered.
pub fn write_teg_file(graph: &CondensedGraph, path: impl AsRef<Path>) -> Result<usize> {
    let file = File::create(path.as_ref())?;
    write_teg(graph, BufWriter::new(file))
}
