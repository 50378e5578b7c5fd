//! Deletion synthesis.
//!
//! A raw edge stream only records when each edge appeared. For benchmarking
//! temporal queries over bounded lifetimes, every edge also needs an end of
//! validity; this module draws one pseudorandomly, reproducibly.

use crate::edge::Timestamp;
use crate::graph::CondensedGraph;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0;

/// Assign a uniformly distributed deletion time to every edge.
///
/// Edges are visited in the arena order (sources ascending, targets
/// ascending within a source), so a given seed always produces the same
/// sequence of draws from the generator; the iteration order is part of the
/// contract. For an edge inserted at `start`, the end snapshot is drawn
/// uniformly from `[start, num_snapshots - 1]`. Only the `end` field is
/// written; `dst` and `start` are untouched.
pub fn synthesize_deletions(graph: &mut CondensedGraph, seed: u64) {
    let num_snapshots = graph.num_snapshots() as Timestamp;
    let mut rng = XorShiftRng::seed_from_u64(seed);

    for edge in graph.edges_mut() {
        let offset = rng.gen_range(0..num_snapshots - edge.start);
        edge.end = edge.start + offset;
    }

    tracing::debug!(seed, "deletion times assigned");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::EdgeList;

    fn build(input: &str) -> CondensedGraph {
        let list = EdgeList::from_reader(input.as_bytes()).unwrap();
        CondensedGraph::from_edge_list(list).unwrap()
    }

    fn ring_input(vertices: u32, snapshots: u32) -> String {
        (0..vertices)
            .map(|v| format!("{},{},{}", v, (v + 1) % vertices, v % snapshots))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_intervals_stay_in_bounds() {
        let mut graph = build(&ring_input(60, 10));
        synthesize_deletions(&mut graph, 7);

        let last = (graph.num_snapshots() - 1) as Timestamp;
        for (_, edge) in graph.iter() {
            assert!(edge.start <= edge.end);
            assert!(edge.end <= last);
        }
    }

    #[test]
    fn test_same_seed_reproduces_intervals() {
        let input = ring_input(60, 10);

        let mut a = build(&input);
        let mut b = build(&input);
        synthesize_deletions(&mut a, 42);
        synthesize_deletions(&mut b, 42);

        let ends_a: Vec<_> = a.iter().map(|(_, e)| e.end).collect();
        let ends_b: Vec<_> = b.iter().map(|(_, e)| e.end).collect();
        assert_eq!(ends_a, ends_b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let input = ring_input(60, 10);

        let mut a = build(&input);
        let mut b = build(&input);
        synthesize_deletions(&mut a, 0);
        synthesize_deletions(&mut b, 1);

        let ends_a: Vec<_> = a.iter().map(|(_, e)| e.end).collect();
        let ends_b: Vec<_> = b.iter().map(|(_, e)| e.end).collect();
        assert_ne!(ends_a, ends_b);
    }

    #[test]
    fn test_only_end_field_changes() {
        let input = "0,1,0\n1,2,1\n0,2,2\n";
        let before = build(input);
        let mut after = build(input);
        synthesize_deletions(&mut after, 3);

        for ((_, b), (_, a)) in before.iter().zip(after.iter()) {
            assert_eq!(b.dst, a.dst);
            assert_eq!(b.start, a.start);
        }
    }

    #[test]
    fn test_single_snapshot_pins_end_to_start() {
        let mut graph = build("0,1,0\n1,0,0\n");
        synthesize_deletions(&mut graph, 9);

        for (_, edge) in graph.iter() {
            assert_eq!(edge.end, edge.start);
        }
    }
}
