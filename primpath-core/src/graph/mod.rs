//! Adjacency-list graph store.
//!
//! Every vertex owns an [`AdjacencyList`] of [`HalfEdge`]s kept in strictly
//! increasing neighbour order. An undirected edge is stored twice, once in
//! each endpoint's list, with the same cost. The same store backs both the
//! weighted input graph and the zero-cost tree adjacency produced from a
//! spanning tree.

use std::fmt;

use tracing::{debug, instrument, warn};

use crate::error::{EdgeViolation, PrimPathError, Result};

/// Vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Non-negative edge cost.
pub type Cost = u64;

/// One direction of an undirected edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HalfEdge {
    neighbor: VertexId,
    cost: Cost,
}

impl HalfEdge {
    /// Creates a half-edge pointing at `neighbor`.
    #[must_use]
    pub const fn new(neighbor: VertexId, cost: Cost) -> Self {
        Self { neighbor, cost }
    }

    /// Returns the vertex this half-edge points at.
    #[must_use]
    #[rustfmt::skip]
    pub const fn neighbor(&self) -> VertexId { self.neighbor }

    /// Returns the edge cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> Cost { self.cost }
}

/// Half-edges leaving a single vertex, sorted by neighbour id.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyList {
    edges: Vec<HalfEdge>,
}

impl AdjacencyList {
    /// Returns the half-edges in increasing neighbour order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[HalfEdge] { &self.edges }

    /// Returns the number of half-edges in the list.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the vertex has no neighbours.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Scans the list for a half-edge pointing at `neighbor`.
    #[must_use]
    pub fn contains(&self, neighbor: VertexId) -> bool {
        self.edges.iter().any(|edge| edge.neighbor == neighbor)
    }

    /// Reserves room for `additional` more half-edges.
    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.edges
            .try_reserve(additional)
            .map_err(|_| PrimPathError::AllocationFailure {
                resource: "adjacency list",
                requested: self.edges.len().saturating_add(additional),
            })
    }

    /// Inserts `edge` before the first entry whose neighbour id is not
    /// smaller, or at the end when every entry is smaller.
    fn insert_sorted(&mut self, edge: HalfEdge) {
        let position = self
            .edges
            .iter()
            .position(|existing| existing.neighbor >= edge.neighbor)
            .unwrap_or(self.edges.len());
        self.edges.insert(position, edge);
    }
}

/// An edge triple exactly as supplied by the caller, prior to validation.
///
/// Values stay signed so that negative endpoints and costs can be reported
/// as [`PrimPathError::InvalidEdgeSpec`] rather than failing to convert.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RawEdge {
    /// First endpoint.
    pub left: i64,
    /// Second endpoint.
    pub right: i64,
    /// Edge cost.
    pub cost: i64,
}

impl RawEdge {
    /// Creates a raw edge triple.
    #[must_use]
    pub const fn new(left: i64, right: i64, cost: i64) -> Self {
        Self { left, right, cost }
    }

    fn validate(
        &self,
        vertex_count: usize,
    ) -> core::result::Result<(VertexId, VertexId, Cost), EdgeViolation> {
        let in_range = |raw: i64| usize::try_from(raw).ok().filter(|&v| v < vertex_count);
        let (Some(left), Some(right)) = (in_range(self.left), in_range(self.right)) else {
            return Err(EdgeViolation::EndpointOutOfRange);
        };
        if left == right {
            return Err(EdgeViolation::SelfLoop);
        }
        let cost = Cost::try_from(self.cost).map_err(|_| EdgeViolation::NegativeCost)?;
        Ok((left, right, cost))
    }
}

/// Undirected graph stored as one sorted adjacency list per vertex.
///
/// # Examples
/// ```
/// use primpath_core::{Graph, RawEdge};
///
/// let graph = Graph::from_edges(3, &[RawEdge::new(0, 2, 4), RawEdge::new(0, 1, 7)])
///     .expect("edges are valid");
/// let neighbours: Vec<usize> = graph.neighbors(0).iter().map(|e| e.neighbor()).collect();
/// assert_eq!(neighbours, vec![1, 2]);
/// assert!(graph.has_edge(2, 0));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    lists: Vec<AdjacencyList>,
    edge_count: usize,
}

impl Graph {
    /// Allocates `vertex_count` empty adjacency lists from a signed count.
    ///
    /// # Errors
    /// Returns [`PrimPathError::InvalidVertexCount`] when `vertex_count` is
    /// negative and [`PrimPathError::AllocationFailure`] when the lists cannot
    /// be reserved.
    pub fn create(vertex_count: i64) -> Result<Self> {
        let count = usize::try_from(vertex_count).map_err(|_| {
            warn!(vertex_count, "vertex count is negative");
            PrimPathError::InvalidVertexCount { got: vertex_count }
        })?;
        Self::with_vertex_count(count)
    }

    /// Allocates `vertex_count` empty adjacency lists.
    ///
    /// # Errors
    /// Returns [`PrimPathError::AllocationFailure`] when the lists cannot be
    /// reserved.
    pub fn with_vertex_count(vertex_count: usize) -> Result<Self> {
        let mut lists = Vec::new();
        lists
            .try_reserve_exact(vertex_count)
            .map_err(|_| PrimPathError::AllocationFailure {
                resource: "graph",
                requested: vertex_count,
            })?;
        lists.resize_with(vertex_count, AdjacencyList::default);
        Ok(Self {
            lists,
            edge_count: 0,
        })
    }

    /// Builds a graph from raw edge triples, validating each one in order.
    ///
    /// Each triple must name two distinct vertices in `[0, vertex_count)` and
    /// carry a non-negative cost; a pair may be connected at most once. The
    /// first violation aborts construction and no partial graph escapes.
    ///
    /// # Errors
    /// Returns [`PrimPathError::InvalidVertexCount`],
    /// [`PrimPathError::InvalidEdgeSpec`], [`PrimPathError::DuplicateEdge`], or
    /// [`PrimPathError::AllocationFailure`].
    #[instrument(
        name = "core.build_graph",
        err,
        skip(edges),
        fields(edges = edges.len()),
    )]
    pub fn from_edges(vertex_count: i64, edges: &[RawEdge]) -> Result<Self> {
        let mut graph = Self::create(vertex_count)?;
        for (index, raw) in edges.iter().enumerate() {
            graph.add_raw_edge(index, raw)?;
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph constructed"
        );
        Ok(graph)
    }

    fn add_raw_edge(&mut self, index: usize, raw: &RawEdge) -> Result<()> {
        let (left, right, cost) = raw.validate(self.vertex_count()).map_err(|violation| {
            warn!(
                index,
                left = raw.left,
                right = raw.right,
                cost = raw.cost,
                %violation,
                "rejecting edge"
            );
            PrimPathError::InvalidEdgeSpec {
                index,
                left: raw.left,
                right: raw.right,
                cost: raw.cost,
                violation,
            }
        })?;
        if self.has_edge(left, right) {
            warn!(index, left, right, "rejecting duplicate edge");
            return Err(PrimPathError::DuplicateEdge { index, left, right });
        }
        self.insert_edge(left, right, cost)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.lists.len() }

    /// Returns the number of undirected edges inserted so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the adjacency list of `vertex`, if it exists.
    #[must_use]
    pub fn adjacency(&self, vertex: VertexId) -> Option<&AdjacencyList> {
        self.lists.get(vertex)
    }

    /// Returns the half-edges leaving `vertex` in increasing neighbour order.
    ///
    /// Vertices outside the graph have no neighbours.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[HalfEdge] {
        self.lists
            .get(vertex)
            .map(AdjacencyList::edges)
            .unwrap_or_default()
    }

    /// Returns `true` when `left` already lists `right` as a neighbour.
    #[must_use]
    pub fn has_edge(&self, left: VertexId, right: VertexId) -> bool {
        self.lists
            .get(left)
            .is_some_and(|list| list.contains(right))
    }

    /// Inserts the undirected edge between `left` and `right` as two sorted
    /// half-edges.
    ///
    /// No duplicate check is performed; [`Graph::from_edges`] rejects
    /// duplicates before calling this.
    ///
    /// # Errors
    /// Returns [`PrimPathError::InvalidEdgeSpec`] when an endpoint is out of
    /// range or the endpoints coincide, and
    /// [`PrimPathError::AllocationFailure`] when a list cannot grow.
    pub fn insert_edge(&mut self, left: VertexId, right: VertexId, cost: Cost) -> Result<()> {
        let vertex_count = self.vertex_count();
        let violation = if left >= vertex_count || right >= vertex_count {
            Some(EdgeViolation::EndpointOutOfRange)
        } else if left == right {
            Some(EdgeViolation::SelfLoop)
        } else {
            None
        };
        if let Some(violation) = violation {
            return Err(PrimPathError::InvalidEdgeSpec {
                index: self.edge_count,
                left: i64::try_from(left).unwrap_or(i64::MAX),
                right: i64::try_from(right).unwrap_or(i64::MAX),
                cost: i64::try_from(cost).unwrap_or(i64::MAX),
                violation,
            });
        }

        self.reserve_half_edges(left, right, 1)?;
        if let Some(list) = self.lists.get_mut(left) {
            list.insert_sorted(HalfEdge::new(right, cost));
        }
        if let Some(list) = self.lists.get_mut(right) {
            list.insert_sorted(HalfEdge::new(left, cost));
        }
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    /// Grows both endpoint lists before either receives a half-edge. On
    /// failure neither list has changed.
    fn reserve_half_edges(
        &mut self,
        left: VertexId,
        right: VertexId,
        additional: usize,
    ) -> Result<()> {
        for vertex in [left, right] {
            if let Some(list) = self.lists.get_mut(vertex) {
                list.reserve(additional)?;
            }
        }
        Ok(())
    }

    /// Iterates over `(vertex, adjacency list)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &AdjacencyList)> {
        self.lists.iter().enumerate()
    }
}

/// Renders one line per vertex: `source: v dest: n, price: c ...`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.iter() {
            write!(f, "source: {vertex}")?;
            for edge in list.edges() {
                write!(f, " dest: {}, price: {}", edge.neighbor, edge.cost)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
