//! Connected component decomposition.
//!
//! Splits a graph into its maximal connected pieces and rebuilds each piece as an independent
//! graph holding the induced edges. The resulting graphs share nothing with the input and can
//! be mutated or moved freely.

use std::collections::HashSet;

use log::debug;

use crate::{
    algorithms::traversal::dfs,
    graph::{GraphMut, Neighbors},
    Result,
};

/// Decomposes a graph into its connected components.
///
/// Vertices are walked in enumeration order. Each vertex not yet assigned to a component seeds a
/// depth-first traversal whose reachable set forms one component. The component graph receives
/// its vertices in DFS discovery order, followed by every edge of the input incident to those
/// vertices. Since a component is closed under adjacency, this is exactly the induced subgraph.
///
/// # Guarantees
///
/// - Every vertex appears in exactly one component
/// - Each component's edge set equals the input's edge set restricted to its vertices
/// - Components are returned in discovery order, which follows enumeration order
///
/// # Complexity
///
/// O(V + E) traversal work plus the cost of inserting each vertex and edge once.
///
/// # Errors
///
/// Propagates failures of [`GraphMut::add_edge`]. A well-formed input graph never triggers one.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::connected_components, graph::WeightedGraph};
///
/// let mut graph = WeightedGraph::from_edges([("A", "B", 1), ("C", "D", 2), ("D", "E", 3)])?;
/// graph.add_vertex("F");
///
/// let components = connected_components(&graph)?;
/// let sizes: Vec<usize> = components.iter().map(|c| c.vertex_count()).collect();
/// assert_eq!(sizes, vec![2, 3, 1]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn connected_components<G>(graph: &G) -> Result<Vec<G>>
where
    G: Neighbors + GraphMut,
{
    debug!(
        "decomposing graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut components = Vec::new();
    let mut visited: HashSet<&G::Vertex> = HashSet::with_capacity(graph.vertex_count());

    for start in graph.vertices() {
        if visited.contains(start) {
            continue;
        }

        let members: Vec<&G::Vertex> = dfs(graph, start).collect();

        let mut component = G::default();
        for &vertex in &members {
            component.add_vertex(vertex.clone());
            visited.insert(vertex);
        }

        // Both endpoints of every edge live in this component; the reverse
        // direction of each edge is absorbed as a duplicate
        for &vertex in &members {
            for (neighbor, weight) in graph.neighbors(vertex) {
                component.add_edge(vertex.clone(), neighbor.clone(), weight)?;
            }
        }

        components.push(component);
    }

    debug!("found {} connected components", components.len());
    Ok(components)
}
