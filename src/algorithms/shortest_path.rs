//! Single-source shortest paths.
//!
//! Dijkstra's algorithm over non-negative edge weights, in two flavors selected by
//! [`ShortestPathStrategy`]:
//!
//! - **Linear scan** - Each round scans every unsettled vertex for the smallest tentative
//!   distance. O(V²) time, no auxiliary priority structure. This is the reference variant and
//!   the default.
//! - **Binary heap** - Tentative distances are pushed onto a min-heap; stale entries are skipped
//!   when popped. O((V + E) log V).
//!
//! Both flavors compute identical distances. Predecessors and [`ShortestPaths::settle_order`]
//! may differ between them when several shortest routes or several equal minima exist.
//!
//! # Tie-breaking
//!
//! The linear scan keeps every candidate whose distance is `<=` the running minimum. Among
//! vertices at the same minimal distance the one enumerated last is therefore settled first.
//! Unreachable vertices are settled too, after all reachable ones, in reverse enumeration order.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    fmt,
};

use log::{debug, trace};

use crate::{
    config::ShortestPathStrategy,
    graph::{Neighbors, VertexKey, Weight},
    Error, Result,
};

/// Distance of a vertex from the source.
///
/// The derived ordering places every [`Distance::Finite`] value below
/// [`Distance::Unreachable`], which acts as infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    /// Total weight of a shortest path
    Finite(u64),
    /// No path exists
    Unreachable,
}

impl Distance {
    /// Returns `true` if a path exists.
    #[must_use]
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the path weight, or `None` if unreachable.
    #[must_use]
    pub fn value(self) -> Option<u64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    /// Extends the distance by one edge.
    ///
    /// Unreachable stays unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DistanceOverflow`] if the sum does not fit into a `u64`.
    pub fn checked_add(self, weight: Weight) -> Result<Distance> {
        match self {
            Distance::Finite(value) => value
                .checked_add(weight)
                .map(Distance::Finite)
                .ok_or(Error::DistanceOverflow),
            Distance::Unreachable => Ok(Distance::Unreachable),
        }
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Distance::Finite(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

/// Result of a single-source shortest path computation.
///
/// Holds one [`Distance`] for every vertex of the analyzed graph, a shortest-path tree encoded
/// as predecessor links, and the order in which vertices were settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<V: VertexKey> {
    source: Option<V>,
    distances: HashMap<V, Distance>,
    predecessors: HashMap<V, V>,
    settle_order: Vec<V>,
}

impl<V: VertexKey> ShortestPaths<V> {
    fn empty() -> Self {
        ShortestPaths {
            source: None,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            settle_order: Vec::new(),
        }
    }

    /// Converts the dense per-index state of a solver run into the keyed result.
    fn assemble(
        vertices: &[&V],
        source: usize,
        distances: &[Distance],
        predecessors: &[Option<usize>],
        settle_order: &[usize],
    ) -> Self {
        ShortestPaths {
            source: Some(vertices[source].clone()),
            distances: vertices
                .iter()
                .zip(distances)
                .map(|(&vertex, &distance)| (vertex.clone(), distance))
                .collect(),
            predecessors: vertices
                .iter()
                .zip(predecessors)
                .filter_map(|(&vertex, pred)| pred.map(|p| (vertex.clone(), vertices[p].clone())))
                .collect(),
            settle_order: settle_order.iter().map(|&i| vertices[i].clone()).collect(),
        }
    }

    /// Returns the source vertex, or `None` if the graph was empty.
    #[must_use]
    pub fn source(&self) -> Option<&V> {
        self.source.as_ref()
    }

    /// Returns the distance of `vertex`, or `None` if it was not part of the graph.
    #[must_use]
    pub fn distance(&self, vertex: &V) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    /// Returns the distance of every vertex of the graph.
    #[must_use]
    pub fn distances(&self) -> &HashMap<V, Distance> {
        &self.distances
    }

    /// Consumes the result and returns the distance map.
    #[must_use]
    pub fn into_distances(self) -> HashMap<V, Distance> {
        self.distances
    }

    /// Returns all vertices in the order the solver settled them.
    #[must_use]
    pub fn settle_order(&self) -> &[V] {
        &self.settle_order
    }

    /// Returns the vertex preceding `vertex` on its shortest path from the source.
    ///
    /// `None` for the source itself, for unreachable vertices and for unknown vertices.
    #[must_use]
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Reconstructs a shortest path from the source to `target`, both inclusive.
    ///
    /// Returns `None` if `target` is unreachable or unknown.
    #[must_use]
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = self.predecessors.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Returns `true` if a path from the source to `vertex` exists.
    #[must_use]
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some_and(Distance::is_finite)
    }

    /// Returns the number of vertices covered by the result.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if the analyzed graph was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Computes shortest distances from `source` with the linear-scan strategy.
///
/// Equivalent to [`dijkstra_with`] using [`ShortestPathStrategy::LinearScan`].
///
/// # Errors
///
/// See [`dijkstra_with`].
///
/// # Examples
///
/// ```rust
/// use graphscope::{
///     algorithms::{dijkstra, Distance},
///     graph::WeightedGraph,
/// };
///
/// let graph = WeightedGraph::from_edges([("A", "B", 1), ("B", "C", 2), ("C", "D", 1), ("A", "D", 10)])?;
/// let paths = dijkstra(&graph, &"A")?;
///
/// assert_eq!(paths.distance(&"D"), Some(Distance::Finite(4)));
/// assert_eq!(paths.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn dijkstra<G: Neighbors>(graph: &G, source: &G::Vertex) -> Result<ShortestPaths<G::Vertex>> {
    dijkstra_with(graph, source, ShortestPathStrategy::LinearScan)
}

/// Computes shortest distances from `source` to every vertex of the graph.
///
/// Every vertex of the graph receives a distance; vertices outside the component of `source`
/// remain [`Distance::Unreachable`]. An empty graph yields an empty result regardless of
/// `source`.
///
/// # Errors
///
/// - [`Error::VertexNotFound`] if the graph is non-empty and does not contain `source`
/// - [`Error::DistanceOverflow`] if a vertex is reachable from `source` but every path to it
///   weighs more than `u64::MAX`
pub fn dijkstra_with<G: Neighbors>(
    graph: &G,
    source: &G::Vertex,
    strategy: ShortestPathStrategy,
) -> Result<ShortestPaths<G::Vertex>> {
    if graph.is_empty() {
        return Ok(ShortestPaths::empty());
    }

    let vertices: Vec<&G::Vertex> = graph.vertices().collect();
    let index: HashMap<&G::Vertex, usize> =
        vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let Some(&source_index) = index.get(source) else {
        return Err(Error::VertexNotFound(format!("{source:?}")));
    };

    debug!(
        "dijkstra ({strategy}) from {source:?} over {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut state = SolverState::new(vertices.len(), source_index);
    match strategy {
        ShortestPathStrategy::LinearScan => state.run_linear_scan(graph, &vertices, &index),
        ShortestPathStrategy::BinaryHeap => state.run_binary_heap(graph, &vertices, &index),
    }

    if let Some(vertex) = state.overflowed_unreachable() {
        debug!("shortest distance to {:?} exceeds u64::MAX", vertices[vertex]);
        return Err(Error::DistanceOverflow);
    }

    Ok(ShortestPaths::assemble(
        &vertices,
        source_index,
        &state.distances,
        &state.predecessors,
        &state.settle_order,
    ))
}

/// Dense solver state indexed by enumeration position.
struct SolverState {
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
    settled: Vec<bool>,
    settle_order: Vec<usize>,
    /// Vertices that were offered a candidate distance beyond `u64::MAX`
    overflowed: Vec<bool>,
}

impl SolverState {
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![Distance::Unreachable; vertex_count];
        distances[source] = Distance::Finite(0);

        SolverState {
            distances,
            predecessors: vec![None; vertex_count],
            settled: vec![false; vertex_count],
            settle_order: Vec::with_capacity(vertex_count),
            overflowed: vec![false; vertex_count],
        }
    }

    fn settle(&mut self, vertex: usize) {
        trace!("settled vertex #{vertex} at distance {}", self.distances[vertex]);
        self.settled[vertex] = true;
        self.settle_order.push(vertex);
    }

    /// Relaxes every unsettled neighbor of `u`. Returns the indices whose distance improved.
    ///
    /// A candidate that does not fit into a `u64` can never improve a stored distance, so the
    /// edge is skipped and the neighbor only remembered as overflowed.
    fn relax<G: Neighbors>(
        &mut self,
        graph: &G,
        vertices: &[&G::Vertex],
        index: &HashMap<&G::Vertex, usize>,
        u: usize,
    ) -> Vec<usize> {
        let mut improved = Vec::new();
        if !self.distances[u].is_finite() {
            return improved;
        }

        for (neighbor, weight) in graph.neighbors(vertices[u]) {
            let Some(&v) = index.get(neighbor) else {
                continue;
            };
            if self.settled[v] {
                continue;
            }

            let Ok(candidate) = self.distances[u].checked_add(weight) else {
                self.overflowed[v] = true;
                continue;
            };
            if candidate < self.distances[v] {
                self.distances[v] = candidate;
                self.predecessors[v] = Some(u);
                improved.push(v);
            }
        }

        improved
    }

    /// Returns a vertex whose every path from the source overflowed, if any.
    ///
    /// Prefixes of a path weighing at most `u64::MAX` never overflow, so a vertex ends up
    /// unreachable after an overflow only if its true distance cannot be represented.
    fn overflowed_unreachable(&self) -> Option<usize> {
        (0..self.distances.len()).find(|&v| self.overflowed[v] && !self.distances[v].is_finite())
    }

    fn run_linear_scan<G: Neighbors>(
        &mut self,
        graph: &G,
        vertices: &[&G::Vertex],
        index: &HashMap<&G::Vertex, usize>,
    ) {
        for _ in 0..vertices.len() {
            let mut minimum = Distance::Unreachable;
            let mut selected = None;
            for (i, &distance) in self.distances.iter().enumerate() {
                if !self.settled[i] && distance <= minimum {
                    minimum = distance;
                    selected = Some(i);
                }
            }

            let Some(u) = selected else {
                break;
            };
            self.settle(u);
            self.relax(graph, vertices, index, u);
        }
    }

    fn run_binary_heap<G: Neighbors>(
        &mut self,
        graph: &G,
        vertices: &[&G::Vertex],
        index: &HashMap<&G::Vertex, usize>,
    ) {
        let mut heap: BinaryHeap<Reverse<(Distance, usize)>> = BinaryHeap::new();
        if let Some(source) = self.distances.iter().position(|d| d.is_finite()) {
            heap.push(Reverse((self.distances[source], source)));
        }

        while let Some(Reverse((distance, u))) = heap.pop() {
            // Stale entry superseded by a later improvement
            if self.settled[u] || distance > self.distances[u] {
                continue;
            }

            self.settle(u);
            for v in self.relax(graph, vertices, index, u) {
                heap.push(Reverse((self.distances[v], v)));
            }
        }

        for u in (0..vertices.len()).rev() {
            if !self.settled[u] {
                self.settle(u);
            }
        }
    }
}
