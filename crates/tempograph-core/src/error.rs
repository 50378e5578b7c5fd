use crate::edge::{Timestamp, VertexId};
use thiserror::Error;

/// Errors produced by the preprocessing pipeline.
///
/// Every variant is fatal for the run: the condensed representation is
/// addressed by raw integer id, so a malformed line or a non-dense id space
/// cannot be recovered from locally. Errors propagate to the top-level
/// driver, which decides process exit behavior.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of fields on an input line.
    #[error("line {line}: expected {expected} fields, found {found}")]
    Format {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A field that must be a non-negative integer is not one.
    #[error("line {line}: invalid integer field {field:?}: {source}")]
    Parse {
        line: u64,
        field: String,
        source: std::num::ParseIntError,
    },

    /// The same ordered (source, target) pair appeared twice.
    #[error("duplicate edge ({src}, {dst}) with timestamps {first} and {second}")]
    DuplicateEdge {
        src: VertexId,
        dst: VertexId,
        first: Timestamp,
        second: Timestamp,
    },

    /// Vertex id space does not start at zero.
    #[error("vertex id space does not start at 0 (min id is {0})")]
    VertexIdBase(VertexId),

    /// Vertex id space has holes.
    #[error("vertex id space has gaps: max id is {max} but only {count} distinct ids")]
    VertexIdGap { max: VertexId, count: usize },

    /// Snapshot id space does not start at zero.
    #[error("snapshot id space does not start at 0 (min id is {0})")]
    SnapshotIdBase(Timestamp),

    /// Snapshot id space has holes.
    #[error("snapshot id space has gaps: max id is {max} but only {count} distinct ids")]
    SnapshotIdGap { max: Timestamp, count: usize },

    /// The input contained no edges.
    #[error("input contains no edges")]
    Empty,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
