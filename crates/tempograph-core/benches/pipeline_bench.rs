use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempograph_core::{synthesize_deletions, CondensedGraph, EdgeList};

fn bench_condense_and_synthesize(c: &mut Criterion) {
    // Ring of 10k vertices with chords: 20k edges over 100 snapshots.
    let num_vertices = 10_000u32;
    let num_snapshots = 100u32;
    let mut lines = Vec::with_capacity(2 * num_vertices as usize);
    for v in 0..num_vertices {
        lines.push(format!("{},{},{}", v, (v + 1) % num_vertices, v % num_snapshots));
        lines.push(format!("{},{},{}", v, (v + 7) % num_vertices, (v + 3) % num_snapshots));
    }
    let input = lines.join("\n");

    c.bench_function("condense_20k_edges", |b| {
        b.iter(|| {
            let list = EdgeList::from_reader(black_box(input.as_bytes())).unwrap();
            CondensedGraph::from_edge_list(list).unwrap()
        })
    });

    let list = EdgeList::from_reader(input.as_bytes()).unwrap();
    let graph = CondensedGraph::from_edge_list(list).unwrap();

    c.bench_function("synthesize_20k_edges", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            synthesize_deletions(black_box(&mut g), 42);
            g
        })
    });
}

criterion_group!(benches, bench_condense_and_synthesize);
criterion_main!(benches);
