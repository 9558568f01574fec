//! Graph algorithms for structural analysis.
//!
//! This module provides the analyses of this crate. Every function borrows its input graph
//! immutably and is generic over the capability traits in [`crate::graph`].
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`depth_first`] - Depth-first reachable set as an owned vector
//!
//! ## Connectivity
//!
//! - [`is_empty`] - Check if a graph has no vertices
//! - [`is_connected`] - Check if every vertex reaches every other vertex
//! - [`component_count`] - Count the connected components
//!
//! ## Component Decomposition
//!
//! - [`connected_components`] - Split a graph into independent component graphs
//!
//! ## Shortest Paths
//!
//! - [`dijkstra`] - Single-source shortest distances (linear scan)
//! - [`dijkstra_with`] - Single-source shortest distances with a chosen strategy
//! - [`ShortestPaths`] - Distances, predecessors and settle order of a run
//! - [`Distance`] - Finite path weight or unreachable
//!
//! ## Articulation Points
//!
//! - [`articulation_points`] - Cut vertices by brute-force probing
//! - [`articulation_points_with`] - Cut vertices with a chosen strategy
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS | O(V + E) | Reachability |
//! | Connectivity / Components | O(V + E) | Partitioning, reachability summaries |
//! | Dijkstra (linear scan) | O(V²) | Reference, dense graphs |
//! | Dijkstra (binary heap) | O((V + E) log V) | Sparse graphs |
//! | Articulation (brute force) | O(V·(V + E)) | Reference, small graphs |
//! | Articulation (low link) | O(V + E) | Large graphs |
//!
//! # Examples
//!
//! ## Connectivity
//!
//! ```rust
//! use graphscope::{algorithms, graph::WeightedGraph};
//!
//! let mut graph = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 1)])?;
//! assert!(algorithms::is_connected(&graph));
//!
//! graph.add_edge("X", "Y", 1)?;
//! assert_eq!(algorithms::connected_components(&graph)?.len(), 2);
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Strategy Selection
//!
//! ```rust
//! use graphscope::{
//!     algorithms::{self, Distance},
//!     config::{ArticulationStrategy, ShortestPathStrategy},
//!     graph::WeightedGraph,
//! };
//!
//! let graph = WeightedGraph::from_edges([(1, 2, 4), (2, 3, 1), (3, 4, 2), (2, 4, 9)])?;
//!
//! let paths = algorithms::dijkstra_with(&graph, &1, ShortestPathStrategy::BinaryHeap)?;
//! assert_eq!(paths.distance(&4), Some(Distance::Finite(7)));
//!
//! let cuts = algorithms::articulation_points_with(&graph, ArticulationStrategy::LowLink)?;
//! assert_eq!(cuts, vec![2]);
//! # Ok::<(), graphscope::Error>(())
//! ```

mod articulation;
mod components;
mod connectivity;
mod shortest_path;
mod traversal;

pub use articulation::{articulation_points, articulation_points_with};
pub use components::connected_components;
pub use connectivity::{component_count, is_connected, is_empty};
pub use shortest_path::{dijkstra, dijkstra_with, Distance, ShortestPaths};
pub use traversal::{depth_first, dfs, DfsIterator};
