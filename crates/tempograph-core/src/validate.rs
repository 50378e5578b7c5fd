//! Id space validation.
//!
//! The condensed graph is addressed by raw integer id: vertex `v` lives in
//! slot `v` and snapshot ids index the temporal range directly. Both id
//! spaces must therefore be dense and zero-based before construction; a gap
//! would corrupt indexing or silently waste space.

use crate::error::{Error, Result};
use crate::loader::EdgeList;

/// Validated id space sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSpaces {
    /// Number of vertices; ids are exactly `0..num_vertices`.
    pub num_vertices: usize,
    /// Number of snapshots; ids are exactly `0..num_snapshots`.
    pub num_snapshots: usize,
}

/// Check that the vertex and snapshot id spaces are dense and zero-based.
///
/// Reports the first failing invariant together with the offending id. An
/// empty edge set is rejected outright: no dense zero-based space can be
/// formed from it.
pub fn validate_id_spaces(edges: &EdgeList) -> Result<IdSpaces> {
    if edges.num_edges() == 0 {
        return Err(Error::Empty);
    }

    let (min_vertex, max_vertex) = bounds(edges.vertices.iter().copied());
    if min_vertex != 0 {
        return Err(Error::VertexIdBase(min_vertex));
    }
    if max_vertex as usize + 1 != edges.vertices.len() {
        return Err(Error::VertexIdGap {
            max: max_vertex,
            count: edges.vertices.len(),
        });
    }

    let (min_snapshot, max_snapshot) = bounds(edges.snapshots.iter().copied());
    if min_snapshot != 0 {
        return Err(Error::SnapshotIdBase(min_snapshot));
    }
    if max_snapshot as usize + 1 != edges.snapshots.len() {
        return Err(Error::SnapshotIdGap {
            max: max_snapshot,
            count: edges.snapshots.len(),
        });
    }

    Ok(IdSpaces {
        num_vertices: edges.vertices.len(),
        num_snapshots: edges.snapshots.len(),
    })
}

fn bounds(ids: impl Iterator<Item = u32>) -> (u32, u32) {
    ids.fold((u32::MAX, 0), |(min, max), id| (min.min(id), max.max(id)))
}
