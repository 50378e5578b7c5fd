//! Condensed temporal graph.

use crate::edge::{OutgoingEdge, VertexId};
use crate::error::Result;
use crate::loader::EdgeList;
use crate::validate::{validate_id_spaces, IdSpaces};
use serde::Serialize;

/// An adjacency structure indexed by dense vertex id.
///
/// Edges live in one flat arena grouped by source:
/// `edges[offsets[v]..offsets[v + 1]]` is vertex `v`'s outgoing slice,
/// sorted ascending by target. The arena order, sources ascending with
/// targets ascending within a source, is a published contract relied on by the
/// deletion synthesizer and the writer.
///
/// Topology is immutable after construction; only each edge's `end` field
/// is populated later.
#[derive(Debug, Clone)]
pub struct CondensedGraph {
    /// Slice boundaries per vertex; length `num_vertices + 1`.
    offsets: Vec<usize>,
    /// All outgoing edges, grouped by source.
    edges: Vec<OutgoingEdge>,
    /// Size of the snapshot id space.
    num_snapshots: usize,
}

impl CondensedGraph {
    /// Build the condensed graph from a loaded edge list.
    ///
    /// Both id spaces are validated first; on any violation the error is
    /// returned before any part of the structure is built. Consumes the
    /// provisional adjacency map, sorting each source's targets once.
    pub fn from_edge_list(list: EdgeList) -> Result<Self> {
        let IdSpaces {
            num_vertices,
            num_snapshots,
        } = validate_id_spaces(&list)?;

        let num_edges = list.num_edges();
        let mut adjacency = list.into_adjacency();

        let mut offsets = Vec::with_capacity(num_vertices + 1);
        let mut edges = Vec::with_capacity(num_edges);
        offsets.push(0);

        for v in 0..num_vertices as VertexId {
            if let Some(outgoing) = adjacency.remove(&v) {
                let base = edges.len();
                edges.extend(
                    outgoing
                        .into_iter()
                        .map(|(dst, time)| OutgoingEdge::new(dst, time)),
                );
                edges[base..].sort_unstable();
            }
            offsets.push(edges.len());
        }

        tracing::debug!(
            vertices = num_vertices,
            edges = edges.len(),
            "condensed graph built"
        );

        Ok(Self {
            offsets,
            edges,
            num_snapshots,
        })
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of snapshots.
    pub fn num_snapshots(&self) -> usize {
        self.num_snapshots
    }

    /// Total number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges of `v`, sorted ascending by target.
    ///
    /// An id outside the vertex space yields an empty slice.
    pub fn outgoing(&self, v: VertexId) -> &[OutgoingEdge] {
        let v = v as usize;
        if v + 1 < self.offsets.len() {
            &self.edges[self.offsets[v]..self.offsets[v + 1]]
        } else {
            &[]
        }
    }

    /// Iterate `(source, edge)` pairs in serialization order: sources
    /// ascending, targets ascending within a source.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &OutgoingEdge)> + '_ {
        (0..self.num_vertices() as VertexId)
            .flat_map(move |v| self.outgoing(v).iter().map(move |e| (v, e)))
    }

    /// The whole edge arena, mutable, in serialization order.
    pub(crate) fn edges_mut(&mut self) -> &mut [OutgoingEdge] {
        &mut self.edges
    }

    /// Compute summary statistics.
    pub fn stats(&self) -> GraphStats {
        let max_out_degree = (0..self.num_vertices() as VertexId)
            .map(|v| self.outgoing(v).len())
            .max()
            .unwrap_or(0);
        let avg_out_degree = if self.num_vertices() > 0 {
            self.num_edges() as f64 / self.num_vertices() as f64
        } else {
            0.0
        };

        GraphStats {
            num_vertices: self.num_vertices(),
            num_snapshots: self.num_snapshots,
            num_edges: self.num_edges(),
            max_out_degree,
            avg_out_degree,
        }
    }
}

/// Statistics about a condensed graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    /// Number of vertices.
    pub num_vertices: usize,
    /// Number of snapshots.
    pub num_snapshots: usize,
    /// Number of directed edges.
    pub num_edges: usize,
    /// Largest outgoing-edge list.
    pub max_out_degree: usize,
    /// Edges per vertex.
    pub avg_out_degree: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(input: &str) -> CondensedGraph {
        let list = EdgeList::from_reader(input.as_bytes()).unwrap();
        CondensedGraph::from_edge_list(list).unwrap()
    }

    #[test]
    fn test_condensed_adjacency_shape() {
        let graph = build("0,1,0\n1,2,1\n0,2,2\n");

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_snapshots(), 3);
        assert_eq!(graph.num_edges(), 3);

        assert_eq!(
            graph.outgoing(0),
            &[OutgoingEdge::new(1, 0), OutgoingEdge::new(2, 2)]
        );
        assert_eq!(graph.outgoing(1), &[OutgoingEdge::new(2, 1)]);
        assert!(graph.outgoing(2).is_empty());
    }

    #[test]
    fn test_targets_sorted_regardless_of_input_order() {
        let graph = build("0,2,0\n0,1,1\n1,0,2\n2,0,0\n");

        let targets: Vec<_> = graph.outgoing(0).iter().map(|e| e.dst).collect();
        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn test_out_of_range_vertex_yields_empty_slice() {
        let graph = build("0,1,0\n1,0,1\n");
        assert!(graph.outgoing(99).is_empty());
    }

    #[test]
    fn test_iter_visits_every_edge_in_order() {
        let graph = build("1,0,0\n0,2,1\n0,1,2\n2,1,0\n");

        let order: Vec<_> = graph.iter().map(|(src, e)| (src, e.dst)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (1, 0), (2, 1)]);
    }

    #[test]
    fn test_validation_failure_builds_nothing() {
        let list = EdgeList::from_reader("0,2,0\n2,0,1\n".as_bytes()).unwrap();
        assert!(CondensedGraph::from_edge_list(list).is_err());
    }

    #[test]
    fn test_stats() {
        let graph = build("0,1,0\n0,2,1\n1,2,2\n");
        let stats = graph.stats();

        assert_eq!(stats.num_vertices, 3);
        assert_eq!(stats.num_edges, 3);
        assert_eq!(stats.max_out_degree, 2);
        assert!((stats.avg_out_degree - 1.0).abs() < f64::EPSILON);
    }
}
