use thiserror::Error;

use crate::graph::Weight;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The analysis functions themselves never fail on a well-formed graph; errors surface from the
/// graph abstraction (lookups and mutations on vertices that do not exist, invalid edges) and from
/// the overflow guard in the shortest path solver. Nothing is retried or recovered internally,
/// every failure propagates to the caller unchanged.
///
/// Vertex values are rendered with their [`Debug`](std::fmt::Debug) representation so the error
/// type stays independent of the vertex domain.
///
/// # Error Categories
///
/// ## Graph Structure Errors
/// - [`Error::VertexNotFound`] - A vertex was referenced that is not part of the graph
/// - [`Error::NotAdjacent`] - An edge weight was requested for two vertices without an edge
/// - [`Error::SelfLoop`] - An edge from a vertex to itself was requested
/// - [`Error::InvalidWeight`] - An edge with a non-positive weight was requested
/// - [`Error::GraphError`] - Other structural failures
///
/// ## Analysis Errors
/// - [`Error::DistanceOverflow`] - A path length no longer fits into the distance type
///
/// # Examples
///
/// ```rust
/// use graphscope::{Error, graph::{Neighbors, WeightedGraph}};
///
/// let mut graph: WeightedGraph<&str> = WeightedGraph::new();
/// graph.add_edge("A", "B", 3)?;
/// graph.add_vertex("C");
///
/// match graph.edge_weight(&"A", &"C") {
///     Ok(weight) => println!("weight: {weight}"),
///     Err(Error::NotAdjacent { from, to }) => println!("{from} and {to} share no edge"),
///     Err(e) => println!("other error: {e}"),
/// }
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The referenced vertex is not part of the graph.
    ///
    /// Returned by edge-weight lookups, vertex removal and by the shortest path solver when the
    /// source vertex is missing from a non-empty graph.
    #[error("Vertex {0} does not exist in the graph")]
    VertexNotFound(String),

    /// An edge weight was requested for two vertices that are not adjacent.
    ///
    /// # Fields
    ///
    /// * `from` - The first endpoint of the requested edge
    /// * `to` - The second endpoint of the requested edge
    #[error("Vertices {from} and {to} are not adjacent")]
    NotAdjacent {
        /// The first endpoint of the requested edge
        from: String,
        /// The second endpoint of the requested edge
        to: String,
    },

    /// An edge connecting a vertex to itself was requested.
    ///
    /// Self-loops are not part of the supported graph model.
    #[error("Self-loop on vertex {0} is not supported")]
    SelfLoop(String),

    /// An edge with a weight that is not strictly positive was requested.
    #[error("Edge {from} - {to} has invalid weight {weight}, weights must be positive")]
    InvalidWeight {
        /// The first endpoint of the rejected edge
        from: String,
        /// The second endpoint of the rejected edge
        to: String,
        /// The rejected weight
        weight: Weight,
    },

    /// Adding an edge weight to a finite distance exceeded the distance range.
    #[error("Path distance exceeds the representable range")]
    DistanceOverflow,

    /// Generic graph structure error.
    ///
    /// Used for structural failures that don't fit into the other categories.
    #[error("{0}")]
    GraphError(String),
}
