//! Slot identifier for vertices stored inside a [`WeightedGraph`](crate::graph::WeightedGraph).
//!
//! Vertices are addressed by their domain value at the public API. Internally each vertex
//! occupies a slot in a dense vector, and adjacency lists refer to neighbors by [`NodeId`]
//! so that neighbor lists stay small and cloning a graph never clones vertex keys twice.

use std::fmt;

/// A strongly-typed identifier for a vertex slot within a weighted graph.
///
/// `NodeId` wraps a `usize` index, providing type safety to prevent accidental mixing of slot
/// indices with weights or counts. Slot indices follow insertion order, which makes them the
/// backbone of the graph's enumeration order.
///
/// Slot indices are only stable until the graph compacts its storage after vertex removals, so
/// they never leave the graph implementation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw slot index.
    #[must_use]
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw slot index of this identifier.
    #[must_use]
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
