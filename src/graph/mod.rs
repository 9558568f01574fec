//! Undirected weighted graph infrastructure.
//!
//! This module provides the graph abstraction every analysis in this crate is written against,
//! together with one concrete implementation.
//!
//! # Architecture
//!
//! - **Traits**: [`GraphBase`], [`Neighbors`] and [`GraphMut`] describe what an algorithm may ask
//!   of a graph. Algorithms take the narrowest set of traits they need.
//! - **Storage**: [`WeightedGraph`] implements all traits with insertion-ordered vertices and
//!   adjacency lists.
//! - **Weights**: every edge carries one positive [`Weight`].
//!
//! # Design Principles
//!
//! ## Domain-Typed Vertices
//!
//! Vertices are addressed by their own value rather than by an index handed out by the graph.
//! Any [`VertexKey`] type (`&str`, integers, identifiers) can be used directly, and analysis
//! results are expressed in the same type.
//!
//! ## Deterministic Enumeration
//!
//! Vertices enumerate in insertion order and neighbors in edge insertion order. Results of the
//! analysis algorithms inherit this order, so repeated runs over the same graph produce the same
//! output.
//!
//! ## Read-Only Analysis
//!
//! Analysis functions borrow the graph immutably. Algorithms that need to mutate (the
//! articulation point probe) work on an explicit [`Clone`] of the input.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphscope::graph::{GraphBase, Neighbors, WeightedGraph};
//!
//! let mut graph: WeightedGraph<&str> = WeightedGraph::new();
//! graph.add_edge("A", "B", 1)?;
//! graph.add_edge("B", "C", 2)?;
//! graph.add_edge("C", "D", 1)?;
//! graph.add_edge("A", "D", 10)?;
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert!(graph.are_adjacent(&"D", &"A"));
//! # Ok::<(), graphscope::Error>(())
//! ```

mod node;
mod traits;
mod weighted;

pub use traits::{GraphBase, GraphMut, Neighbors, VertexKey};
pub use weighted::WeightedGraph;

/// Weight of an undirected edge.
///
/// Weights are strictly positive; [`WeightedGraph`] rejects zero when an edge is added.
pub type Weight = u64;
