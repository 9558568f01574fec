//! Strategy-aware entry point bundling all analyses of one graph.
//!
//! [`GraphAnalyzer`] pairs a borrowed graph with an [`AnalysisConfig`] and forwards each query to
//! the matching function in [`crate::algorithms`]. It holds no state of its own, so creating
//! several analyzers over the same graph is cheap and they never interfere.
//!
//! # Examples
//!
//! ```rust
//! use graphscope::{
//!     algorithms::Distance,
//!     analyzer::GraphAnalyzer,
//!     config::AnalysisConfig,
//!     graph::WeightedGraph,
//! };
//!
//! let graph = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 2), ("C", "D", 1)])?;
//! let analyzer = GraphAnalyzer::with_config(&graph, AnalysisConfig::fast());
//!
//! assert!(analyzer.is_connected());
//! assert_eq!(analyzer.articulation_points()?, vec!["B", "C"]);
//! assert_eq!(analyzer.shortest_paths(&"A")?.distance(&"D"), Some(Distance::Finite(4)));
//! # Ok::<(), graphscope::Error>(())
//! ```

use crate::{
    algorithms::{self, ShortestPaths},
    config::AnalysisConfig,
    graph::{GraphMut, Neighbors},
    Result,
};

/// Read-only analysis facade over a borrowed graph.
#[derive(Debug, Clone)]
pub struct GraphAnalyzer<'g, G> {
    graph: &'g G,
    config: AnalysisConfig,
}

impl<'g, G> GraphAnalyzer<'g, G>
where
    G: Neighbors + GraphMut,
{
    /// Creates an analyzer using the reference configuration.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, AnalysisConfig::default())
    }

    /// Creates an analyzer using the given configuration.
    #[must_use]
    pub fn with_config(graph: &'g G, config: AnalysisConfig) -> Self {
        GraphAnalyzer { graph, config }
    }

    /// Returns the analyzed graph.
    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// See [`algorithms::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        algorithms::is_empty(self.graph)
    }

    /// See [`algorithms::is_connected`].
    #[must_use]
    pub fn is_connected(&self) -> bool {
        algorithms::is_connected(self.graph)
    }

    /// See [`algorithms::component_count`].
    #[must_use]
    pub fn component_count(&self) -> usize {
        algorithms::component_count(self.graph)
    }

    /// See [`algorithms::connected_components`].
    ///
    /// # Errors
    ///
    /// Propagates graph construction failures.
    pub fn connected_components(&self) -> Result<Vec<G>> {
        algorithms::connected_components(self.graph)
    }

    /// Computes shortest paths from `source` with the configured strategy.
    ///
    /// # Errors
    ///
    /// See [`algorithms::dijkstra_with`].
    pub fn shortest_paths(&self, source: &G::Vertex) -> Result<ShortestPaths<G::Vertex>> {
        algorithms::dijkstra_with(self.graph, source, self.config.shortest_path)
    }

    /// Finds articulation points with the configured strategy.
    ///
    /// # Errors
    ///
    /// See [`algorithms::articulation_points_with`].
    pub fn articulation_points(&self) -> Result<Vec<G::Vertex>> {
        algorithms::articulation_points_with(self.graph, self.config.articulation)
    }
}
