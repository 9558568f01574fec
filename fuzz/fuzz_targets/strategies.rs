#![no_main]

use graphscope::{
    algorithms::{articulation_points_with, component_count, connected_components, dijkstra_with},
    config::{ArticulationStrategy, ShortestPathStrategy},
    graph::WeightedGraph,
};
use libfuzzer_sys::fuzz_target;

// First byte selects the vertex count, every following triple is (u, v, weight)
fn build(data: &[u8]) -> Option<WeightedGraph<u8>> {
    let (&count, edges) = data.split_first()?;
    let count = count % 48 + 1;

    let mut graph = WeightedGraph::new();
    for v in 0..count {
        graph.add_vertex(v);
    }
    for chunk in edges.chunks_exact(3) {
        let (u, v, weight) = (chunk[0] % count, chunk[1] % count, u64::from(chunk[2]));
        let _ = graph.add_edge(u, v, weight);
    }
    Some(graph)
}

fuzz_target!(|data: &[u8]| {
    let Some(graph) = build(data) else {
        return;
    };

    let components = connected_components(&graph).unwrap();
    assert_eq!(components.len(), component_count(&graph));
    let induced: usize = components.iter().map(|c| c.edge_count()).sum();
    assert_eq!(induced, graph.edge_count());

    let brute = articulation_points_with(&graph, ArticulationStrategy::BruteForce).unwrap();
    let low_link = articulation_points_with(&graph, ArticulationStrategy::LowLink).unwrap();
    assert_eq!(brute, low_link);

    for source in graph.vertices() {
        let linear = dijkstra_with(&graph, source, ShortestPathStrategy::LinearScan).unwrap();
        let heap = dijkstra_with(&graph, source, ShortestPathStrategy::BinaryHeap).unwrap();
        assert_eq!(linear.distances(), heap.distances());
    }
});
