//! Depth-first path search over a tree adjacency store.

use std::fmt;

use tracing::{debug, instrument, warn};

use crate::{
    error::{PrimPathError, Result},
    graph::{Graph, VertexId},
    memory::try_filled,
};

/// Visit state of a vertex during one search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Ordered vertices of a path, from the query's first vertex to its last.
///
/// # Examples
/// ```
/// use primpath_core::{build_tree_paths, find_path};
///
/// let tree = build_tree_paths(&[None, Some(0), Some(1), Some(2)])?;
/// let path = find_path(&tree, 0, 3)?;
/// assert_eq!(path.vertices(), &[0, 1, 2, 3]);
/// assert_eq!(path.to_string(), "0 1 2 3");
/// # Ok::<(), primpath_core::PrimPathError>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TreePath {
    vertices: Vec<VertexId>,
}

impl TreePath {
    /// Returns the path's vertices in travel order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[VertexId] { &self.vertices }

    /// Returns the number of vertices on the path.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.vertices.len() }

    /// Returns `true` when the path holds no vertices.
    ///
    /// Paths produced by [`find_path`] always hold at least one vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Consumes the path, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }
}

/// Renders the vertices separated by single spaces.
impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices = self.vertices.iter();
        if let Some(head) = vertices.next() {
            write!(f, "{head}")?;
        }
        for vertex in vertices {
            write!(f, " {vertex}")?;
        }
        Ok(())
    }
}

struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// Finds the path from `first` to `last` by depth-first search.
///
/// Neighbours are explored in increasing id order. The search stops the
/// moment `last` appears as a neighbour, so on a tree the result is the
/// unique simple path. When `first == last` the path is `[first]`.
///
/// # Errors
/// Returns [`PrimPathError::InvalidQueryBounds`] when either endpoint is not
/// a vertex of `tree`, [`PrimPathError::NoPathFound`] when the search
/// exhausts every reachable vertex without meeting `last`, and
/// [`PrimPathError::AllocationFailure`] when the working arrays cannot be
/// reserved.
#[instrument(
    name = "core.find_path",
    err,
    skip(tree),
    fields(vertices = tree.vertex_count()),
)]
pub fn find_path(tree: &Graph, first: VertexId, last: VertexId) -> Result<TreePath> {
    let vertex_count = tree.vertex_count();
    if first >= vertex_count || last >= vertex_count {
        warn!(first, last, vertex_count, "path query out of bounds");
        return Err(PrimPathError::InvalidQueryBounds {
            first: saturating_signed(first),
            last: saturating_signed(last),
            vertex_count,
        });
    }
    if first == last {
        return Ok(TreePath {
            vertices: vec![first],
        });
    }

    let discovered_by = search(tree, first, last)?;
    let path = reconstruct(&discovered_by, first, last)?;
    debug!(length = path.len(), "path found");
    Ok(path)
}

/// Runs the search and returns the discovery parent of every reached vertex.
fn search(tree: &Graph, first: VertexId, last: VertexId) -> Result<Vec<Option<VertexId>>> {
    let vertex_count = tree.vertex_count();
    let mut color = try_filled("colour array", vertex_count, Color::Unvisited)?;
    let mut discovered_by = try_filled("search parent array", vertex_count, None)?;

    store(&mut color, first, Color::InProgress);
    let mut stack = vec![Frame {
        vertex: first,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let vertex = frame.vertex;
        let next = tree.neighbors(vertex).get(frame.cursor).map(|e| e.neighbor());
        frame.cursor += 1;

        let Some(neighbor) = next else {
            store(&mut color, vertex, Color::Done);
            stack.pop();
            continue;
        };
        if neighbor == last {
            store(&mut discovered_by, neighbor, Some(vertex));
            store(&mut color, neighbor, Color::Done);
            return Ok(discovered_by);
        }
        if color.get(neighbor) == Some(&Color::Unvisited) {
            store(&mut discovered_by, neighbor, Some(vertex));
            store(&mut color, neighbor, Color::InProgress);
            stack.push(Frame {
                vertex: neighbor,
                cursor: 0,
            });
        }
    }

    debug!(first, last, "search exhausted without reaching target");
    Err(PrimPathError::NoPathFound { first, last })
}

/// Writes `value` into the slot for `vertex`; ids outside the array are
/// ignored.
fn store<T>(slots: &mut [T], vertex: VertexId, value: T) {
    if let Some(slot) = slots.get_mut(vertex) {
        *slot = value;
    }
}

/// Walks discovery parents back from `last` and reverses the walk.
fn reconstruct(
    discovered_by: &[Option<VertexId>],
    first: VertexId,
    last: VertexId,
) -> Result<TreePath> {
    let mut vertices = vec![last];
    let mut current = last;
    while current != first {
        let parent = discovered_by
            .get(current)
            .copied()
            .flatten()
            .filter(|_| vertices.len() <= discovered_by.len())
            .ok_or(PrimPathError::NoPathFound { first, last })?;
        vertices.push(parent);
        current = parent;
    }
    vertices.reverse();
    Ok(TreePath { vertices })
}

fn saturating_signed(vertex: VertexId) -> i64 {
    i64::try_from(vertex).unwrap_or(i64::MAX)
}
