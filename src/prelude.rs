//! # graphscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and
//! functions of the graphscope library. Import this module to get quick access to everything
//! needed to build a graph and analyze it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphscope operations
pub use crate::Error;

/// The result type used throughout graphscope
pub use crate::Result;

// ================================================================================================
// Graph Infrastructure
// ================================================================================================

/// Graph capability traits
pub use crate::graph::{GraphBase, GraphMut, Neighbors, VertexKey};

/// Concrete graph storage and edge weight type
pub use crate::graph::{Weight, WeightedGraph};

// ================================================================================================
// Analysis
// ================================================================================================

/// Configured analysis facade
pub use crate::analyzer::GraphAnalyzer;

/// Strategy selection
pub use crate::config::{AnalysisConfig, ArticulationStrategy, ShortestPathStrategy};

/// Connectivity and component decomposition
pub use crate::algorithms::{component_count, connected_components, is_connected, is_empty};

/// Shortest paths
pub use crate::algorithms::{dijkstra, dijkstra_with, Distance, ShortestPaths};

/// Articulation points
pub use crate::algorithms::{articulation_points, articulation_points_with};

/// Traversal
pub use crate::algorithms::{depth_first, dfs};
