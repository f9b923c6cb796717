//! Minimum spanning tree (MST) construction with Prim's algorithm.
//!
//! Selection runs a full linear scan over a [`CandidateSet`] on every step,
//! giving `O(V²)` work on dense graphs. Relaxation lowers candidate costs in
//! place. The result is a parent-pointer [`SpanningTree`].

mod candidates;

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    error::{PrimPathError, Result},
    graph::{Cost, Graph, VertexId},
    memory::try_filled,
};

pub use self::candidates::{Candidate, CandidateSet};

/// Cost marking a vertex that has not yet been reached from the root.
pub const INFINITE_COST: Cost = Cost::MAX;

/// Default root vertex for Prim's algorithm.
pub const DEFAULT_ROOT: VertexId = 0;

/// Parent-pointer representation of a spanning tree.
///
/// `parent(v)` is `None` for the root only. `entry_cost(v)` is the cost of the
/// edge that attached `v` to the tree, and `0` for the root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    root: Option<VertexId>,
    parents: Vec<Option<VertexId>>,
    entry_costs: Vec<Cost>,
}

impl SpanningTree {
    /// Returns the root vertex, or `None` for an empty graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> Option<VertexId> { self.root }

    /// Returns the number of vertices spanned.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.parents.len() }

    /// Returns the parent array indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[Option<VertexId>] { &self.parents }

    /// Returns the tree parent of `vertex`.
    #[must_use]
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Returns the cost of the edge that attached `vertex` to the tree.
    #[must_use]
    pub fn entry_cost(&self, vertex: VertexId) -> Option<Cost> {
        self.entry_costs.get(vertex).copied()
    }

    /// Returns the summed cost of every tree edge.
    #[must_use]
    pub fn total_weight(&self) -> Cost {
        self.edges()
            .fold(0, |total, (_, _, cost)| total.saturating_add(cost))
    }

    /// Iterates over `(child, parent, cost)` for every tree edge in child
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Cost)> + '_ {
        self.parents
            .iter()
            .zip(&self.entry_costs)
            .enumerate()
            .filter_map(|(child, (parent, &cost))| parent.map(|p| (child, p, cost)))
    }
}

/// Builds a minimum spanning tree rooted at vertex `0`.
///
/// # Errors
/// Returns [`PrimPathError::DisconnectedGraph`] when some vertex cannot be
/// reached from the root, and [`PrimPathError::AllocationFailure`] when the
/// working arrays cannot be reserved.
///
/// # Examples
/// ```
/// use primpath_core::{Graph, RawEdge, build_mst};
///
/// let graph = Graph::from_edges(
///     4,
///     &[
///         RawEdge::new(0, 1, 1),
///         RawEdge::new(1, 2, 2),
///         RawEdge::new(2, 3, 3),
///         RawEdge::new(0, 3, 10),
///     ],
/// )?;
/// let tree = build_mst(&graph)?;
/// assert_eq!(tree.parents(), &[None, Some(0), Some(1), Some(2)]);
/// assert_eq!(tree.total_weight(), 6);
/// # Ok::<(), primpath_core::PrimPathError>(())
/// ```
pub fn build_mst(graph: &Graph) -> Result<SpanningTree> {
    build_mst_from(graph, DEFAULT_ROOT)
}

/// Builds a minimum spanning tree rooted at `root`.
///
/// # Errors
/// Returns [`PrimPathError::InvalidRoot`] when `root` is not a vertex of a
/// non-empty graph, [`PrimPathError::DisconnectedGraph`] when some vertex
/// cannot be reached from the root, and [`PrimPathError::AllocationFailure`]
/// when the working arrays cannot be reserved.
#[instrument(
    name = "core.build_mst",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn build_mst_from(graph: &Graph, root: VertexId) -> Result<SpanningTree> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        debug!("graph is empty, returning an empty tree");
        return Ok(SpanningTree {
            root: None,
            parents: Vec::new(),
            entry_costs: Vec::new(),
        });
    }
    if root >= vertex_count {
        warn!(root, vertex_count, "root is not a vertex of the graph");
        return Err(PrimPathError::InvalidRoot { root, vertex_count });
    }

    let mut min_cost = try_filled("minimum cost array", vertex_count, INFINITE_COST)?;
    let mut in_tree = try_filled("tree membership array", vertex_count, false)?;
    let mut parents = try_filled("parent array", vertex_count, None)?;
    if let Some(cost) = min_cost.get_mut(root) {
        *cost = 0;
    }

    let mut candidates = CandidateSet::from_costs(&min_cost)?;
    while let Some(selected) = candidates.extract_min() {
        record_extraction();
        let vertex = selected.vertex();
        if selected.cost() == INFINITE_COST {
            warn!(vertex, "vertex unreachable from root");
            return Err(PrimPathError::DisconnectedGraph {
                vertex,
                vertex_count,
            });
        }
        if let Some(joined) = in_tree.get_mut(vertex) {
            *joined = true;
        }
        trace!(vertex, cost = selected.cost(), remaining = %candidates, "vertex joined tree");

        for edge in graph.neighbors(vertex) {
            let neighbor = edge.neighbor();
            let Some(best) = min_cost.get_mut(neighbor) else {
                continue;
            };
            if in_tree.get(neighbor).copied().unwrap_or(true) || edge.cost() >= *best {
                continue;
            }
            *best = edge.cost();
            if let Some(parent) = parents.get_mut(neighbor) {
                *parent = Some(vertex);
            }
            candidates.decrease_key(neighbor, edge.cost());
            record_decrease_key();
        }
    }

    let tree = SpanningTree {
        root: Some(root),
        parents,
        entry_costs: min_cost,
    };
    info!(total_weight = tree.total_weight(), "spanning tree built");
    Ok(tree)
}

#[cfg(feature = "metrics")]
fn record_extraction() {
    metrics::counter!("prim_candidate_extractions").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_extraction() {}

#[cfg(feature = "metrics")]
fn record_decrease_key() {
    metrics::counter!("prim_decrease_key_updates").increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_decrease_key() {}

#[cfg(test)]
mod property;
