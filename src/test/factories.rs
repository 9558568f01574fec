//! Graph factories shared by unit tests.
//!
//! Every factory is deterministic: the same call always produces the same vertices in the same
//! enumeration order with the same weights.

use crate::graph::{Weight, WeightedGraph};

/// Path `v0 - v1 - ... - vn` with unit weights.
pub fn path_graph(vertices: &[&'static str]) -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new();
    for &vertex in vertices {
        graph.add_vertex(vertex);
    }
    for pair in vertices.windows(2) {
        graph.add_edge(pair[0], pair[1], 1).unwrap();
    }
    graph
}

/// Cycle through all `vertices` with unit weights, closing back to the first one.
pub fn cycle_graph(vertices: &[&'static str]) -> WeightedGraph<&'static str> {
    let mut graph = path_graph(vertices);
    if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
        graph.add_edge(last, first, 1).unwrap();
    }
    graph
}

/// Star with `center` connected to each leaf, unit weights. The center is enumerated first.
pub fn star_graph(center: &'static str, leaves: &[&'static str]) -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(center);
    for &leaf in leaves {
        graph.add_edge(center, leaf, 1).unwrap();
    }
    graph
}

/// A-B(1), B-C(2), C-D(1), A-D(10): the indirect route A-B-C-D beats the direct edge.
pub fn detour_graph() -> WeightedGraph<&'static str> {
    WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 2), ("C", "D", 1), ("A", "D", 10)])
        .unwrap()
}

/// Two triangles A-B-C and D-E-F joined by the bridge C-D.
pub fn bridged_triangles() -> WeightedGraph<&'static str> {
    WeightedGraph::from_edges([
        ("A", "B", 1),
        ("B", "C", 1),
        ("C", "A", 1),
        ("C", "D", 5),
        ("D", "E", 1),
        ("E", "F", 1),
        ("F", "D", 1),
    ])
    .unwrap()
}

/// `rows x cols` grid; horizontal edges weigh 1, vertical edges weigh 2.
pub fn grid_graph(rows: usize, cols: usize) -> WeightedGraph<(usize, usize)> {
    let mut graph = WeightedGraph::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            graph.add_vertex((r, c));
            if c > 0 {
                graph.add_edge((r, c - 1), (r, c), 1).unwrap();
            }
            if r > 0 {
                graph.add_edge((r - 1, c), (r, c), 2).unwrap();
            }
        }
    }
    graph
}

/// A deterministic family of graphs over `u32` vertices with mixed structure: trees, cycles,
/// bridges, isolated vertices and several components.
pub fn scattered_graphs() -> Vec<WeightedGraph<u32>> {
    let mut graphs = Vec::new();
    for n in [1u32, 2, 5, 9, 14, 23] {
        for stride in [2u32, 3, 5] {
            let mut graph = WeightedGraph::new();
            for v in 0..n {
                graph.add_vertex(v);
            }
            for v in 0..n {
                // Sparse, uneven connections; vertices with v % 4 == 3 only get incoming edges
                if v % 4 == 3 {
                    continue;
                }
                let target = (v * stride + 1) % n;
                if target != v {
                    let weight: Weight = u64::from((v + target) % 7 + 1);
                    graph.add_edge(v, target, weight).unwrap();
                }
            }
            graphs.push(graph);
        }
    }
    graphs
}
