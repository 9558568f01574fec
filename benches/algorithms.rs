#![allow(unused)]
extern crate graphscope;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphscope::{
    algorithms::{articulation_points_with, connected_components, dijkstra_with},
    config::{ArticulationStrategy, ShortestPathStrategy},
    graph::WeightedGraph,
};
use std::hint::black_box;
use strum::IntoEnumIterator;

/// `side x side` grid with a pendant tail hanging off one corner, so that both dense regions
/// without cut vertices and a chain of cut vertices are present.
fn grid_with_tail(side: u32) -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::with_capacity((side * side + side) as usize);
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            graph.add_vertex(v);
            if c > 0 {
                graph.add_edge(v - 1, v, u64::from(v % 5 + 1)).unwrap();
            }
            if r > 0 {
                graph.add_edge(v - side, v, u64::from(v % 3 + 2)).unwrap();
            }
        }
    }

    let base = side * side;
    let mut previous = base - 1;
    for offset in 0..side {
        graph.add_edge(previous, base + offset, 1).unwrap();
        previous = base + offset;
    }
    graph
}

/// Benchmark the shortest path strategies against each other
///
/// The linear scan is quadratic in the vertex count regardless of density, the heap variant
/// scales with the edge count, so the gap widens with the grid size.
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    for side in [8u32, 16, 32] {
        let graph = grid_with_tail(side);
        group.throughput(Throughput::Elements(graph.vertex_count() as u64));

        for strategy in ShortestPathStrategy::iter() {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), side),
                &graph,
                |b, graph| {
                    b.iter(|| {
                        let paths = dijkstra_with(graph, black_box(&0), strategy).unwrap();
                        black_box(paths)
                    });
                },
            );
        }
    }
    group.finish();
}

/// Benchmark the articulation point strategies against each other
fn bench_articulation_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("articulation_points");
    for side in [4u32, 8, 12] {
        let graph = grid_with_tail(side);
        group.throughput(Throughput::Elements(graph.vertex_count() as u64));

        for strategy in ArticulationStrategy::iter() {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), side),
                &graph,
                |b, graph| {
                    b.iter(|| {
                        let points = articulation_points_with(black_box(graph), strategy).unwrap();
                        black_box(points)
                    });
                },
            );
        }
    }
    group.finish();
}

/// Benchmark component decomposition on a graph split into many pieces
fn bench_components(c: &mut Criterion) {
    let mut graph = WeightedGraph::new();
    for block in 0..64u32 {
        let base = block * 16;
        for offset in 0..15 {
            graph.add_edge(base + offset, base + offset + 1, 1).unwrap();
        }
    }

    let mut group = c.benchmark_group("components");
    group.throughput(Throughput::Elements(graph.vertex_count() as u64));
    group.bench_function("connected_components", |b| {
        b.iter(|| {
            let components = connected_components(black_box(&graph)).unwrap();
            black_box(components)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_shortest_paths,
    bench_articulation_points,
    bench_components
);
criterion_main!(benches);
