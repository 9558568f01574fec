//! Undirected weighted graph keyed by domain vertices.
//!
//! This module provides [`WeightedGraph`], the concrete graph type of this crate. Vertices are
//! addressed by their domain value (`&str`, integers, identifiers, ...) and mapped internally to
//! dense [`NodeId`] slots, in the same way a key-indexed graph hides its index bookkeeping from
//! callers.
//!
//! # Memory Layout
//!
//! - Each vertex occupies one slot in a vector; slots are ordered by insertion
//! - Each slot holds the vertex key plus its adjacency list of `(NodeId, Weight)` pairs
//! - A hash map resolves vertex keys to slots in O(1)
//!
//! Removing a vertex leaves a tombstone slot behind so that the remaining slots keep their
//! relative order. Once tombstones dominate the storage the graph compacts itself.

use std::collections::HashMap;

use crate::{
    graph::{
        node::NodeId,
        traits::{GraphBase, GraphMut, Neighbors, VertexKey},
        Weight,
    },
    Error, Result,
};

/// Storage for one live vertex and its incident edges.
#[derive(Debug, Clone)]
struct VertexSlot<V> {
    /// The domain value of the vertex
    key: V,
    /// Incident edges in insertion order
    neighbors: Vec<(NodeId, Weight)>,
}

/// An undirected graph with positive integer edge weights.
///
/// `WeightedGraph<V>` stores vertices of any [`VertexKey`] type and undirected edges carrying a
/// single [`Weight`]. It supports:
///
/// - Deterministic enumeration: vertices in insertion order, neighbors in edge insertion order
/// - O(1) vertex lookup and O(degree) adjacency queries
/// - Vertex removal that drops all incident edges and keeps the order of the remaining vertices
/// - Deep copies through [`Clone`]
///
/// Parallel edges and self-loops are rejected, as are zero weights.
///
/// # Thread Safety
///
/// `WeightedGraph<V>` is [`Send`] and [`Sync`] when `V` is. Analysis functions only take shared
/// references, so a finished graph can be queried from several threads at once.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{GraphBase, Neighbors, WeightedGraph};
///
/// let graph = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 2)])?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_weight(&"C", &"B")?, 2);
///
/// let order: Vec<&&str> = graph.vertices().collect();
/// assert_eq!(order, vec![&"A", &"B", &"C"]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<V>
where
    V: VertexKey,
{
    /// Vertex slots in insertion order, `None` for removed vertices
    slots: Vec<Option<VertexSlot<V>>>,
    /// Map from vertex key to its slot
    key_to_node: HashMap<V, NodeId>,
    /// Number of undirected edges
    edge_count: usize,
}

impl<V> Default for WeightedGraph<V>
where
    V: VertexKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WeightedGraph<V>
where
    V: VertexKey,
{
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            key_to_node: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for `vertex_capacity` vertices.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(vertex_capacity),
            key_to_node: HashMap::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// Vertices are enumerated in the order they first appear in `edges`. Repeated edges are
    /// ignored after their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`add_edge`](Self::add_edge).
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, Weight)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Adds a vertex. Returns `false` if it was already present.
    ///
    /// This method is idempotent - adding the same vertex twice keeps its original position in
    /// the enumeration order.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.key_to_node.contains_key(&vertex) {
            return false;
        }
        self.insert_slot(vertex);
        true
    }

    /// Adds an undirected edge between `u` and `v`, creating missing endpoints.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if a new edge was added
    /// * `Ok(false)` if the edge already existed (the existing weight is kept)
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfLoop`] if `u == v` and [`Error::InvalidWeight`] if `weight` is zero.
    /// Neither endpoint is created when an error is returned.
    pub fn add_edge(&mut self, u: V, v: V, weight: Weight) -> Result<bool> {
        if u == v {
            return Err(Error::SelfLoop(format!("{u:?}")));
        }
        if weight == 0 {
            return Err(Error::InvalidWeight {
                from: format!("{u:?}"),
                to: format!("{v:?}"),
                weight,
            });
        }

        let u_node = self.node_or_insert(u);
        let v_node = self.node_or_insert(v);

        if self.has_edge(u_node, v_node) {
            return Ok(false);
        }

        if let Some(slot) = self.slots[u_node.index()].as_mut() {
            slot.neighbors.push((v_node, weight));
        }
        if let Some(slot) = self.slots[v_node.index()].as_mut() {
            slot.neighbors.push((u_node, weight));
        }
        self.edge_count += 1;

        Ok(true)
    }

    /// Removes a vertex together with all edges incident to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not part of the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let node = self
            .key_to_node
            .remove(vertex)
            .ok_or_else(|| Error::VertexNotFound(format!("{vertex:?}")))?;

        let Some(removed) = self.slots[node.index()].take() else {
            return Err(Error::GraphError(format!(
                "vertex {vertex:?} maps to empty slot {node}"
            )));
        };

        for &(neighbor, _) in &removed.neighbors {
            if let Some(slot) = self.slots[neighbor.index()].as_mut() {
                slot.neighbors.retain(|&(other, _)| other != node);
            }
        }
        self.edge_count -= removed.neighbors.len();

        if self.slots.len() > 2 * self.key_to_node.len() + 16 {
            self.compact();
        }

        Ok(())
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.key_to_node.len()
    }

    /// Returns the number of undirected edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_to_node.is_empty()
    }

    /// Returns `true` if `vertex` is part of the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.key_to_node.contains_key(vertex)
    }

    /// Returns the graph's own copy of `vertex`, if present.
    #[must_use]
    pub fn get_vertex(&self, vertex: &V) -> Option<&V> {
        self.slot(vertex).map(|slot| &slot.key)
    }

    /// Returns an iterator over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|slot| &slot.key))
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of `vertex`.
    ///
    /// Neighbors are yielded in the order their edges were added. An unknown vertex yields
    /// nothing.
    pub fn neighbors(&self, vertex: &V) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.slot(vertex).into_iter().flat_map(move |slot| {
            slot.neighbors
                .iter()
                .filter_map(move |&(node, weight)| self.key(node).map(|key| (key, weight)))
        })
    }

    /// Returns `true` if an edge connects `u` and `v`.
    #[must_use]
    pub fn are_adjacent(&self, u: &V, v: &V) -> bool {
        match (self.key_to_node.get(u), self.key_to_node.get(v)) {
            (Some(&u_node), Some(&v_node)) => self.has_edge(u_node, v_node),
            _ => false,
        }
    }

    /// Returns the weight of the edge connecting `u` and `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either vertex is missing and [`Error::NotAdjacent`]
    /// if both exist but share no edge.
    pub fn edge_weight(&self, u: &V, v: &V) -> Result<Weight> {
        let u_node = self.node(u)?;
        let v_node = self.node(v)?;

        self.slots[u_node.index()]
            .as_ref()
            .and_then(|slot| {
                slot.neighbors
                    .iter()
                    .find(|&&(other, _)| other == v_node)
                    .map(|&(_, weight)| weight)
            })
            .ok_or_else(|| Error::NotAdjacent {
                from: format!("{u:?}"),
                to: format!("{v:?}"),
            })
    }

    /// Returns an iterator over every undirected edge exactly once.
    ///
    /// Each edge is yielded as `(u, v, weight)` where `u` precedes `v` in enumeration order.
    /// Edges are grouped by `u` in enumeration order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, Weight)> + '_ {
        self.slots.iter().enumerate().flat_map(move |(index, slot)| {
            slot.iter().flat_map(move |slot| {
                slot.neighbors
                    .iter()
                    .filter(move |&&(other, _)| other.index() > index)
                    .filter_map(move |&(other, weight)| {
                        self.key(other).map(|other| (&slot.key, other, weight))
                    })
            })
        })
    }

    fn insert_slot(&mut self, vertex: V) -> NodeId {
        let node = NodeId::new(self.slots.len());
        self.key_to_node.insert(vertex.clone(), node);
        self.slots.push(Some(VertexSlot {
            key: vertex,
            neighbors: Vec::new(),
        }));
        node
    }

    fn node_or_insert(&mut self, vertex: V) -> NodeId {
        match self.key_to_node.get(&vertex) {
            Some(&node) => node,
            None => self.insert_slot(vertex),
        }
    }

    fn node(&self, vertex: &V) -> Result<NodeId> {
        self.key_to_node
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::VertexNotFound(format!("{vertex:?}")))
    }

    fn slot(&self, vertex: &V) -> Option<&VertexSlot<V>> {
        let node = self.key_to_node.get(vertex)?;
        self.slots[node.index()].as_ref()
    }

    fn key(&self, node: NodeId) -> Option<&V> {
        self.slots
            .get(node.index())
            .and_then(|slot| slot.as_ref().map(|slot| &slot.key))
    }

    fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        let (Some(u_slot), Some(v_slot)) = (
            self.slots[u.index()].as_ref(),
            self.slots[v.index()].as_ref(),
        ) else {
            return false;
        };

        // Scan the shorter adjacency list
        if u_slot.neighbors.len() <= v_slot.neighbors.len() {
            u_slot.neighbors.iter().any(|&(other, _)| other == v)
        } else {
            v_slot.neighbors.iter().any(|&(other, _)| other == u)
        }
    }

    /// Drops tombstone slots and renumbers the remaining ones, preserving their order.
    fn compact(&mut self) {
        let mut remap = vec![usize::MAX; self.slots.len()];
        let mut next = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.is_some() {
                remap[index] = next;
                next += 1;
            }
        }

        let slots = std::mem::take(&mut self.slots);
        self.slots = slots
            .into_iter()
            .flatten()
            .map(|mut slot| {
                for (neighbor, _) in &mut slot.neighbors {
                    *neighbor = NodeId::new(remap[neighbor.index()]);
                }
                Some(slot)
            })
            .collect();

        for node in self.key_to_node.values_mut() {
            *node = NodeId::new(remap[node.index()]);
        }
    }
}

impl<V> PartialEq for WeightedGraph<V>
where
    V: VertexKey,
{
    /// Two graphs are equal if they hold the same vertices and the same weighted edges,
    /// regardless of enumeration order.
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count() == other.edge_count()
            && self.vertices().all(|vertex| other.contains_vertex(vertex))
            && self
                .edges()
                .all(|(u, v, weight)| other.edge_weight(u, v) == Ok(weight))
    }
}

impl<V> Eq for WeightedGraph<V> where V: VertexKey {}

impl<V> GraphBase for WeightedGraph<V>
where
    V: VertexKey,
{
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.key_to_node.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> impl Iterator<Item = &V> {
        WeightedGraph::vertices(self)
    }

    fn get_vertex(&self, vertex: &V) -> Option<&V> {
        WeightedGraph::get_vertex(self, vertex)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.key_to_node.contains_key(vertex)
    }
}

impl<V> Neighbors for WeightedGraph<V>
where
    V: VertexKey,
{
    fn neighbors(&self, vertex: &V) -> impl Iterator<Item = (&V, Weight)> {
        WeightedGraph::neighbors(self, vertex)
    }

    fn are_adjacent(&self, u: &V, v: &V) -> bool {
        WeightedGraph::are_adjacent(self, u, v)
    }

    fn edge_weight(&self, u: &V, v: &V) -> Result<Weight> {
        WeightedGraph::edge_weight(self, u, v)
    }
}

impl<V> GraphMut for WeightedGraph<V>
where
    V: VertexKey,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        WeightedGraph::add_vertex(self, vertex)
    }

    fn add_edge(&mut self, u: V, v: V, weight: Weight) -> Result<bool> {
        WeightedGraph::add_edge(self, u, v, weight)
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        WeightedGraph::remove_vertex(self, vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let graph: WeightedGraph<&str> = WeightedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertices().count(), 0);
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph: WeightedGraph<&str> = WeightedGraph::new();
        assert!(graph.add_vertex("A"));
        assert!(graph.add_vertex("B"));
        assert!(!graph.add_vertex("A"));

        assert_eq!(graph.vertex_count(), 2);
        let order: Vec<&&str> = graph.vertices().collect();
        assert_eq!(order, vec![&"A", &"B"]);
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph: WeightedGraph<u32> = WeightedGraph::new();
        assert!(graph.add_edge(1, 2, 10).unwrap());

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.are_adjacent(&1, &2));
        assert!(graph.are_adjacent(&2, &1));
    }

    #[test]
    fn test_add_edge_duplicate_keeps_weight() {
        let mut graph: WeightedGraph<&str> = WeightedGraph::new();
        assert!(graph.add_edge("A", "B", 3).unwrap());
        assert!(!graph.add_edge("B", "A", 9).unwrap());

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&"A", &"B"), Ok(3));
        assert_eq!(graph.neighbors(&"A").count(), 1);
    }

    #[test]
    fn test_add_edge_rejects_self_loop() {
        let mut graph: WeightedGraph<&str> = WeightedGraph::new();
        assert_eq!(
            graph.add_edge("A", "A", 1),
            Err(Error::SelfLoop("\"A\"".to_string()))
        );
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_edge_rejects_zero_weight() {
        let mut graph: WeightedGraph<&str> = WeightedGraph::new();
        assert!(matches!(
            graph.add_edge("A", "B", 0),
            Err(Error::InvalidWeight { weight: 0, .. })
        ));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_edge_weight_is_symmetric() {
        let graph = WeightedGraph::from_edges([("A", "B", 4), ("B", "C", 6)]).unwrap();
        assert_eq!(graph.edge_weight(&"A", &"B"), Ok(4));
        assert_eq!(graph.edge_weight(&"B", &"A"), Ok(4));
        assert_eq!(graph.edge_weight(&"C", &"B"), Ok(6));
    }

    #[test]
    fn test_edge_weight_errors() {
        let graph = WeightedGraph::from_edges([("A", "B", 4), ("B", "C", 6)]).unwrap();
        assert_eq!(
            graph.edge_weight(&"A", &"C"),
            Err(Error::NotAdjacent {
                from: "\"A\"".to_string(),
                to: "\"C\"".to_string(),
            })
        );
        assert_eq!(
            graph.edge_weight(&"A", &"Z"),
            Err(Error::VertexNotFound("\"Z\"".to_string()))
        );
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let graph =
            WeightedGraph::from_edges([("A", "C", 1), ("A", "B", 2), ("D", "A", 3)]).unwrap();
        let neighbors: Vec<(&&str, Weight)> = graph.neighbors(&"A").collect();
        assert_eq!(neighbors, vec![(&"C", 1), (&"B", 2), (&"D", 3)]);
        assert_eq!(graph.neighbors(&"missing").count(), 0);
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut graph =
            WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 1), ("C", "A", 1), ("C", "D", 1)])
                .unwrap();
        graph.remove_vertex(&"C").unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains_vertex(&"C"));
        assert!(graph.are_adjacent(&"A", &"B"));
        assert_eq!(graph.neighbors(&"D").count(), 0);

        let order: Vec<&&str> = graph.vertices().collect();
        assert_eq!(order, vec![&"A", &"B", &"D"]);
    }

    #[test]
    fn test_remove_missing_vertex() {
        let mut graph: WeightedGraph<&str> = WeightedGraph::new();
        graph.add_vertex("A");
        assert_eq!(
            graph.remove_vertex(&"B"),
            Err(Error::VertexNotFound("\"B\"".to_string()))
        );
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_remove_then_readd_moves_to_end() {
        let mut graph: WeightedGraph<&str> = WeightedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.remove_vertex(&"A").unwrap();
        graph.add_vertex("A");

        let order: Vec<&&str> = graph.vertices().collect();
        assert_eq!(order, vec![&"B", &"A"]);
    }

    #[test]
    fn test_compaction_preserves_structure() {
        let mut graph: WeightedGraph<u32> = WeightedGraph::new();
        for i in 0..100 {
            graph.add_edge(i, i + 1, u64::from(i) + 1).unwrap();
        }
        for i in 0..90 {
            graph.remove_vertex(&i).unwrap();
        }

        assert!(graph.slots.len() < 101);
        assert_eq!(graph.vertex_count(), 11);
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.edge_weight(&95, &96), Ok(96));

        graph.add_edge(90, 100, 7).unwrap();
        assert_eq!(graph.edge_weight(&100, &90), Ok(7));

        let order: Vec<u32> = graph.vertices().copied().collect();
        assert_eq!(order, (90..=100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 2)]).unwrap();
        let mut copy = original.clone();
        copy.remove_vertex(&"B").unwrap();

        assert_eq!(original.vertex_count(), 3);
        assert_eq!(original.edge_count(), 2);
        assert_eq!(copy.vertex_count(), 2);
        assert_eq!(copy.edge_count(), 0);
    }

    #[test]
    fn test_edges_yield_each_edge_once() {
        let graph =
            WeightedGraph::from_edges([("A", "B", 1), ("C", "A", 2), ("B", "C", 3)]).unwrap();
        let edges: Vec<(&&str, &&str, Weight)> = graph.edges().collect();
        assert_eq!(edges, vec![(&"A", &"B", 1), (&"A", &"C", 2), (&"B", &"C", 3)]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let first = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 2)]).unwrap();
        let second = WeightedGraph::from_edges([("C", "B", 2), ("B", "A", 1)]).unwrap();
        let third = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 5)]).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn test_trait_dispatch_matches_inherent() {
        fn count<G: GraphBase>(graph: &G) -> usize {
            graph.vertices().count()
        }

        let graph = WeightedGraph::from_edges([(1u8, 2u8, 1)]).unwrap();
        assert_eq!(count(&graph), 2);
        assert_eq!(Neighbors::degree(&graph, &1), 1);
    }
}
