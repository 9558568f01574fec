//! Articulation point detection.
//!
//! An articulation point (cut vertex) is a vertex whose removal, together with its incident
//! edges, increases the number of connected components. Two strategies are available through
//! [`ArticulationStrategy`]:
//!
//! - **Brute force** - Removes each vertex from a private copy of the graph and recounts the
//!   components. O(V·(V + E)). Directly mirrors the definition and serves as the reference.
//! - **Low link** - One depth-first pass per component recording discovery times and low points.
//!   A non-root vertex `u` is a cut vertex iff some DFS child `c` has `low[c] >= disc[u]`; a DFS
//!   root is a cut vertex iff it has at least two DFS children. O(V + E).
//!
//! Both strategies report the same vertices in enumeration order.
//!
//! # Disconnected Graphs
//!
//! The component count of the input is the baseline, so a vertex is reported only if its
//! removal splits its own component. Removing an isolated vertex lowers the count and removing
//! a leaf keeps it, neither of which qualifies.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    algorithms::connectivity::component_count,
    config::ArticulationStrategy,
    graph::{GraphMut, Neighbors},
    Result,
};

/// Finds all articulation points using brute-force probing.
///
/// Equivalent to [`articulation_points_with`] using [`ArticulationStrategy::BruteForce`].
///
/// # Errors
///
/// See [`articulation_points_with`].
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::articulation_points, graph::WeightedGraph};
///
/// let graph = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 1), ("C", "D", 1)])?;
/// assert_eq!(articulation_points(&graph)?, vec!["B", "C"]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn articulation_points<G>(graph: &G) -> Result<Vec<G::Vertex>>
where
    G: Neighbors + GraphMut,
{
    articulation_points_with(graph, ArticulationStrategy::BruteForce)
}

/// Finds all articulation points using the given strategy.
///
/// The input graph is never modified. Results are ordered by vertex enumeration order. Empty
/// and single-vertex graphs have no articulation points.
///
/// # Errors
///
/// Propagates failures of [`GraphMut::remove_vertex`] on a probe copy. A well-formed input graph
/// never triggers one.
pub fn articulation_points_with<G>(
    graph: &G,
    strategy: ArticulationStrategy,
) -> Result<Vec<G::Vertex>>
where
    G: Neighbors + GraphMut,
{
    debug!(
        "searching articulation points ({strategy}) over {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let points = match strategy {
        ArticulationStrategy::BruteForce => brute_force(graph)?,
        ArticulationStrategy::LowLink => low_link(graph),
    };

    debug!("found {} articulation points", points.len());
    Ok(points)
}

fn brute_force<G>(graph: &G) -> Result<Vec<G::Vertex>>
where
    G: Neighbors + GraphMut,
{
    let baseline = component_count(graph);
    let mut points = Vec::new();

    for vertex in graph.vertices() {
        let mut probe = graph.clone();
        probe.remove_vertex(vertex)?;

        let remaining = component_count(&probe);
        trace!("removing {vertex:?}: {baseline} -> {remaining} components");

        if remaining > baseline {
            points.push(vertex.clone());
        }
    }

    Ok(points)
}

const UNVISITED: usize = usize::MAX;

fn low_link<G: Neighbors>(graph: &G) -> Vec<G::Vertex> {
    let vertices: Vec<&G::Vertex> = graph.vertices().collect();
    let index: HashMap<&G::Vertex, usize> =
        vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let adjacency: Vec<Vec<usize>> = vertices
        .iter()
        .map(|&vertex| {
            graph
                .neighbors(vertex)
                .filter_map(|(neighbor, _)| index.get(neighbor).copied())
                .collect()
        })
        .collect();

    let count = vertices.len();
    let mut disc = vec![UNVISITED; count];
    let mut low = vec![0; count];
    let mut is_cut = vec![false; count];
    let mut timer = 0;

    for root in 0..count {
        if disc[root] != UNVISITED {
            continue;
        }

        disc[root] = timer;
        low[root] = timer;
        timer += 1;

        let mut root_children = 0;
        // (vertex, position of the next neighbor to explore)
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(&(u, next)) = stack.last() {
            if let Some(&v) = adjacency[u].get(next) {
                let top = stack.len() - 1;
                stack[top].1 += 1;

                if disc[v] == UNVISITED {
                    disc[v] = timer;
                    low[v] = timer;
                    timer += 1;
                    if u == root {
                        root_children += 1;
                    }
                    stack.push((v, 0));
                } else {
                    low[u] = low[u].min(disc[v]);
                }
                continue;
            }

            stack.pop();
            if let Some(&(parent, _)) = stack.last() {
                low[parent] = low[parent].min(low[u]);
                if parent != root && low[u] >= disc[parent] {
                    is_cut[parent] = true;
                }
            }
        }

        if root_children >= 2 {
            is_cut[root] = true;
        }
    }

    vertices
        .into_iter()
        .zip(is_cut)
        .filter_map(|(vertex, cut)| cut.then(|| vertex.clone()))
        .collect()
}
