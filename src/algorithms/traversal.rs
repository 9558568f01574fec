//! Graph traversal.
//!
//! This module provides the depth-first reachability primitive the connectivity, component and
//! articulation analyses are built on.
//!
//! # Algorithms
//!
//! - [`dfs`] - Iterative depth-first search (pre-order), lazily evaluated
//! - [`depth_first`] - The same traversal collected into an owned vector
//!
//! # Iteration vs Collection
//!
//! [`dfs`] returns an iterator, which avoids allocating a result when a caller only needs to count
//! or test reachable vertices. [`depth_first`] clones the visited vertices for callers that need
//! an owned reachable set detached from the graph.

use std::collections::HashSet;

use crate::graph::Neighbors;

/// Depth-first search iterator over graph vertices.
///
/// This iterator performs an iterative (non-recursive) depth-first traversal starting from a
/// given vertex. It visits each reachable vertex exactly once in pre-order (visiting a vertex
/// before its descendants). Neighbors are explored in the order the graph reports them.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Neighbors`]
pub struct DfsIterator<'g, G: Neighbors> {
    graph: &'g G,
    stack: Vec<&'g G::Vertex>,
    visited: HashSet<&'g G::Vertex>,
}

impl<'g, G: Neighbors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: &G::Vertex) -> Self {
        let Some(start) = graph.get_vertex(start) else {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: HashSet::new(),
            };
        };

        let mut visited = HashSet::new();
        visited.insert(start);

        DfsIterator {
            graph,
            stack: vec![start],
            visited,
        }
    }

    /// Returns the number of vertices discovered so far, including those still on the stack.
    #[must_use]
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, G: Neighbors> Iterator for DfsIterator<'g, G> {
    type Item = &'g G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.stack.pop()?;

        // Push unvisited neighbors in reverse order so that they are visited in the
        // original order
        let neighbors: Vec<&'g G::Vertex> = self
            .graph
            .neighbors(vertex)
            .map(|(neighbor, _)| neighbor)
            .collect();
        for &neighbor in neighbors.iter().rev() {
            if self.visited.insert(neighbor) {
                self.stack.push(neighbor);
            }
        }

        Some(vertex)
    }
}

/// Returns a depth-first search iterator starting from the given vertex.
///
/// The iterator visits each vertex reachable from `start` exactly once, `start` first. A start
/// vertex that is not part of the graph yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E) restricted to the component of `start`
/// - Space: O(V) for the visited set and stack
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::dfs, graph::WeightedGraph};
///
/// let mut graph = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 1)])?;
/// graph.add_vertex("D");
///
/// let reachable: Vec<&&str> = dfs(&graph, &"A").collect();
/// assert_eq!(reachable, vec![&"A", &"B", &"C"]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn dfs<'g, G: Neighbors>(graph: &'g G, start: &G::Vertex) -> DfsIterator<'g, G> {
    DfsIterator::new(graph, start)
}

/// Collects every vertex reachable from `start`, including `start`, in DFS pre-order.
///
/// This is the owned form of [`dfs`]: the returned vertices are clones and do not borrow the
/// graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::depth_first, graph::WeightedGraph};
///
/// let graph = WeightedGraph::from_edges([(1, 2, 1), (3, 4, 1)])?;
/// assert_eq!(depth_first(&graph, &3), vec![3, 4]);
/// assert!(depth_first(&graph, &9).is_empty());
/// # Ok::<(), graphscope::Error>(())
/// ```
#[must_use]
pub fn depth_first<G: Neighbors>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex> {
    dfs(graph, start).cloned().collect()
}
