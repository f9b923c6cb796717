//! Materialises a parent-pointer tree as a bidirectional adjacency store.

use tracing::{debug, instrument, warn};

use crate::{
    error::{PrimPathError, Result},
    graph::{Graph, VertexId},
};

/// Builds a zero-cost tree graph from a parent array.
///
/// Every vertex with a parent contributes one undirected edge to that
/// parent, inserted with the graph store's sorted insertion. Roots add no
/// edge of their own but still receive edges from their children. The
/// returned graph shares nothing with the graph the tree was computed from.
///
/// # Errors
/// Returns [`PrimPathError::InvalidEdgeSpec`] when a parent is not a vertex
/// of the array or a vertex names itself as parent,
/// [`PrimPathError::DuplicateEdge`] when two vertices name each other as
/// parent, and [`PrimPathError::AllocationFailure`] when storage runs out.
///
/// # Examples
/// ```
/// use primpath_core::build_tree_paths;
///
/// let tree = build_tree_paths(&[None, Some(0), Some(0)])?;
/// let root_neighbours: Vec<usize> = tree.neighbors(0).iter().map(|e| e.neighbor()).collect();
/// assert_eq!(root_neighbours, vec![1, 2]);
/// assert!(tree.neighbors(2).iter().all(|e| e.cost() == 0));
/// # Ok::<(), primpath_core::PrimPathError>(())
/// ```
#[instrument(
    name = "core.build_tree_paths",
    err,
    skip(parents),
    fields(vertices = parents.len()),
)]
pub fn build_tree_paths(parents: &[Option<VertexId>]) -> Result<Graph> {
    let mut tree = Graph::with_vertex_count(parents.len())?;
    for (child, entry) in parents.iter().enumerate() {
        let Some(parent) = *entry else {
            continue;
        };
        if tree.has_edge(child, parent) {
            warn!(child, parent, "parent link repeats an existing tree edge");
            return Err(PrimPathError::DuplicateEdge {
                index: child,
                left: child,
                right: parent,
            });
        }
        tree.insert_edge(child, parent, 0)?;
    }
    debug!(edges = tree.edge_count(), "tree adjacency built");
    Ok(tree)
}
