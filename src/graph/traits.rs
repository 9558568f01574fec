//! Trait definitions for the graph abstraction.
//!
//! The analysis algorithms never touch a concrete storage type. They are written against the
//! capability traits in this module, so any graph that can enumerate its vertices, report
//! neighbors with weights and (where needed) be copied and mutated can be analyzed.
//!
//! # Architecture
//!
//! The trait hierarchy is minimal and composable:
//!
//! - [`VertexKey`] - Capability bound for vertex values (equality, hashing, cloning, debug output)
//! - [`GraphBase`] - Core properties: vertex and edge counts, vertex enumeration
//! - [`Neighbors`] - Weighted adjacency queries
//! - [`GraphMut`] - Construction, removal and deep copies
//!
//! # Enumeration Order
//!
//! [`GraphBase::vertices`] must yield vertices in a deterministic order that is stable across
//! calls for an unchanged graph. Every algorithm in this crate derives its output order, and its
//! tie-breaking, from that order.

use std::{fmt::Debug, hash::Hash};

use crate::{graph::Weight, Result};

/// Capability bound for vertex values.
///
/// Vertices are used as keys in hash-based sets and maps during analysis, are copied into
/// component graphs and results, and are rendered into error messages. Any type that is
/// `Clone + Eq + Hash + Debug` qualifies automatically.
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Debug {}

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{GraphBase, WeightedGraph};
///
/// let mut graph: WeightedGraph<&str> = WeightedGraph::new();
/// graph.add_edge("A", "B", 1)?;
/// graph.add_vertex("C");
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.first_vertex(), Some(&"A"));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub trait GraphBase {
    /// The vertex domain type of the graph.
    type Vertex: VertexKey;

    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices in enumeration order.
    ///
    /// The order must be deterministic and stable across calls for an unchanged graph.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex>;

    /// Returns the graph's own copy of `vertex`, if it is part of the graph.
    ///
    /// Traversals use the returned reference so that their state borrows only from the graph.
    fn get_vertex(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex>;

    /// Returns `true` if `vertex` is part of the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.get_vertex(vertex).is_some()
    }

    /// Returns `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns the first vertex in enumeration order, if any.
    fn first_vertex(&self) -> Option<&Self::Vertex> {
        self.vertices().next()
    }
}

/// Trait for graphs that answer weighted adjacency queries.
///
/// Edges are undirected: if `v` is reported as a neighbor of `u` with weight `w`, then `u` is
/// reported as a neighbor of `v` with the same weight.
pub trait Neighbors: GraphBase {
    /// Returns an iterator over `(neighbor, weight)` pairs of the given vertex.
    ///
    /// Neighbors are yielded in a deterministic order. An unknown vertex has no neighbors.
    fn neighbors(&self, vertex: &Self::Vertex) -> impl Iterator<Item = (&Self::Vertex, Weight)>;

    /// Returns `true` if an edge connects `u` and `v`.
    fn are_adjacent(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Returns the weight of the edge connecting `u` and `v`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::VertexNotFound`] if either vertex is missing and
    /// [`crate::Error::NotAdjacent`] if both exist but share no edge.
    fn edge_weight(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<Weight>;

    /// Returns the number of edges incident to `vertex`.
    fn degree(&self, vertex: &Self::Vertex) -> usize {
        self.neighbors(vertex).count()
    }
}

/// Trait for graphs that can be built, copied and shrunk.
///
/// `Default` produces an empty graph, used by the component decomposer to build each component.
/// `Clone` must produce a fully independent deep copy; the articulation point detector mutates
/// such copies and relies on the original staying untouched.
pub trait GraphMut: GraphBase + Clone + Default {
    /// Adds a vertex. Returns `false` if it was already present.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> bool;

    /// Adds an undirected edge between `u` and `v`, creating missing endpoints.
    ///
    /// Returns `Ok(false)` if the edge already exists; the existing weight is kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SelfLoop`] if `u == v` and [`crate::Error::InvalidWeight`] if
    /// `weight` is zero.
    fn add_edge(&mut self, u: Self::Vertex, v: Self::Vertex, weight: Weight) -> Result<bool>;

    /// Removes a vertex together with all edges incident to it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::VertexNotFound`] if the vertex is not part of the graph.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> Result<()>;
}
