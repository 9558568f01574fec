// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphscope
//!
//! Structural analysis of undirected, positively weighted graphs.
//!
//! `graphscope` answers the classic questions about the shape of a graph: whether it is empty or
//! connected, which connected components it falls apart into, how far every vertex lies from a
//! chosen source, and which vertices hold the graph together.
//!
//! ## Features
//!
//! - **Generic vertices** - Analyze graphs over `&str`, integers or any hashable identifier
//! - **Connectivity** - Emptiness, connectivity and component counting in O(V + E)
//! - **Component decomposition** - Independent component graphs with their induced edges
//! - **Shortest paths** - Dijkstra with linear-scan or binary-heap selection, path reconstruction
//! - **Articulation points** - Brute-force probing or a single low-link pass
//! - **Deterministic output** - Results follow vertex insertion order
//!
//! ## Quick Start
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge("A", "B", 1)?;
//! graph.add_edge("B", "C", 2)?;
//! graph.add_edge("C", "D", 1)?;
//! graph.add_edge("A", "D", 10)?;
//!
//! let analyzer = GraphAnalyzer::new(&graph);
//! assert!(analyzer.is_connected());
//! assert!(analyzer.articulation_points()?.is_empty());
//!
//! let paths = analyzer.shortest_paths(&"A")?;
//! assert_eq!(paths.distance(&"D"), Some(Distance::Finite(4)));
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Graph traits and the [`graph::WeightedGraph`] storage type
//! - [`algorithms`] - Traversal, connectivity, components, shortest paths, articulation points
//! - [`config`] - Strategy selection for the analyses with more than one algorithm
//! - [`analyzer`] - [`analyzer::GraphAnalyzer`], a configured facade over one graph
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate emits diagnostics through the [`log`](https://docs.rs/log) facade: `debug` when an
//! analysis starts or finishes, `trace` for every settled vertex and articulation probe. No
//! logger is installed; attach one in the binary if the output is wanted.

pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let graph = WeightedGraph::from_edges([(1, 2, 3), (2, 3, 4)])?;
/// assert_eq!(articulation_points(&graph)?, vec![2]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub mod prelude;

pub mod algorithms;
pub mod analyzer;
pub mod config;
pub mod graph;

/// `graphscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::connected_components, graph::WeightedGraph, Result};
///
/// fn largest_component(graph: &WeightedGraph<u32>) -> Result<usize> {
///     let components = connected_components(graph)?;
///     Ok(components.iter().map(|c| c.vertex_count()).max().unwrap_or(0))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphscope` Error type
///
/// The main error type for all operations in this crate. See the variant documentation for the
/// conditions that produce each error.
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::dijkstra, graph::WeightedGraph, Error};
///
/// let graph = WeightedGraph::from_edges([("A", "B", 1)])?;
/// match dijkstra(&graph, &"Z") {
///     Ok(paths) => println!("{} vertices", paths.len()),
///     Err(Error::VertexNotFound(vertex)) => println!("no such source: {vertex}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// # Ok::<(), graphscope::Error>(())
/// ```
pub use error::Error;
