//! The end-to-end preprocessing pipeline.
//!
//! Loader → Validator → Builder → Synthesizer → Writer, strictly in that
//! order; each stage consumes the previous stage's complete output. No
//! stage terminates the process: every failure propagates as
//! [`Error`](crate::Error) to the caller, which decides exit behavior.

use crate::error::Result;
use crate::graph::CondensedGraph;
use crate::loader::EdgeList;
use crate::synth::synthesize_deletions;
use crate::writer::write_teg_file;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Extension appended to the input path when no output path is given.
pub const DELETIONS_EXT: &str = "deletions";

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Number of vertices.
    pub num_vertices: usize,
    /// Number of snapshots.
    pub num_snapshots: usize,
    /// Number of edges written.
    pub num_edges: usize,
    /// Where the canonical file was written.
    pub output: PathBuf,
}

/// Preprocess a canonical edge file into a TEG with synthesized deletions.
///
/// The output path defaults to `<input>.deletions`. Nothing is written
/// until loading, validation, construction, and synthesis have all
/// succeeded, so a failing run never leaves a partial output file behind.
pub fn run(input: &Path, output: Option<&Path>, seed: u64) -> Result<PipelineReport> {
    let output = output.map_or_else(
        || append_extension(input, DELETIONS_EXT),
        Path::to_path_buf,
    );

    let list = EdgeList::from_path(input)?;
    let mut graph = CondensedGraph::from_edge_list(list)?;
    synthesize_deletions(&mut graph, seed);
    let num_edges = write_teg_file(&graph, &output)?;

    tracing::info!(
        vertices = graph.num_vertices(),
        snapshots = graph.num_snapshots(),
        edges = num_edges,
        output = %output.display(),
        "pipeline complete"
    );

    Ok(PipelineReport {
        num_vertices: graph.num_vertices(),
        num_snapshots: graph.num_snapshots(),
        num_edges,
        output,
    })
}

/// Append `ext` after the existing extension: `input.teg` → `input.teg.deletions`.
pub(crate) fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".");
    os.push(ext);
    PathBuf::from(os)
}
