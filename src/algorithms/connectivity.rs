//! Emptiness and connectivity tests.
//!
//! These are the leaf queries of the crate. The component decomposer and the articulation point
//! detector both build on the notion of reachability defined here.

use std::collections::HashSet;

use crate::{
    algorithms::traversal::dfs,
    graph::{GraphBase, Neighbors},
};

/// Returns `true` if the graph has no vertices.
///
/// # Complexity
///
/// O(1) for [`WeightedGraph`](crate::graph::WeightedGraph).
#[must_use]
pub fn is_empty<G: GraphBase>(graph: &G) -> bool {
    graph.vertex_count() == 0
}

/// Returns `true` if every vertex is reachable from every other vertex.
///
/// The empty graph and single-vertex graphs are connected. Otherwise the graph is connected if a
/// depth-first traversal from the first vertex in enumeration order reaches every vertex.
///
/// # Complexity
///
/// O(V + E).
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::is_connected, graph::WeightedGraph};
///
/// let mut graph = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 1)])?;
/// assert!(is_connected(&graph));
///
/// graph.add_vertex("D");
/// assert!(!is_connected(&graph));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[must_use]
pub fn is_connected<G: Neighbors>(graph: &G) -> bool {
    match graph.first_vertex() {
        None => true,
        Some(start) => dfs(graph, start).count() == graph.vertex_count(),
    }
}

/// Returns the number of maximal connected components.
///
/// The empty graph has zero components; every isolated vertex forms its own component.
///
/// # Complexity
///
/// O(V + E).
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::component_count, graph::WeightedGraph};
///
/// let mut graph = WeightedGraph::from_edges([(1, 2, 1), (3, 4, 1)])?;
/// graph.add_vertex(5);
/// assert_eq!(component_count(&graph), 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[must_use]
pub fn component_count<G: Neighbors>(graph: &G) -> usize {
    let mut visited: HashSet<&G::Vertex> = HashSet::with_capacity(graph.vertex_count());
    let mut count = 0;

    for vertex in graph.vertices() {
        if visited.contains(vertex) {
            continue;
        }
        count += 1;
        visited.extend(dfs(graph, vertex));
    }

    count
}
