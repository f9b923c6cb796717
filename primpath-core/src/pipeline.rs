//! Pipeline orchestration: graph, spanning tree, tree graph, then path.
//!
//! Provides the [`PrimPath`] runner and the [`PipelineOutput`] it returns.

use tracing::{info, instrument, warn};

use crate::{
    error::{PrimPathError, Result},
    graph::{Graph, VertexId},
    input::ProblemInput,
    mst::{SpanningTree, build_mst_from},
    paths::{TreePath, build_tree_paths, find_path},
};

/// Result of the path query at the end of the pipeline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathOutcome {
    /// The tree connects the endpoints; the path runs from `first` to `last`.
    Found(TreePath),
    /// The search exhausted the tree without reaching `last`.
    NoPath {
        /// Query start vertex.
        first: VertexId,
        /// Query end vertex.
        last: VertexId,
    },
}

impl PathOutcome {
    /// Returns the path when one was found.
    #[must_use]
    pub const fn path(&self) -> Option<&TreePath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath { .. } => None,
        }
    }
}

/// Everything the pipeline produced for one problem.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    graph: Option<Graph>,
    tree: SpanningTree,
    tree_graph: Option<Graph>,
    outcome: PathOutcome,
}

impl PipelineOutput {
    /// Returns the validated input graph when the runner retains graphs.
    #[must_use]
    pub const fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Returns the minimum spanning tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree(&self) -> &SpanningTree { &self.tree }

    /// Returns the zero-cost tree graph when the runner retains graphs.
    #[must_use]
    pub const fn tree_graph(&self) -> Option<&Graph> {
        self.tree_graph.as_ref()
    }

    /// Returns the path query outcome.
    #[must_use]
    #[rustfmt::skip]
    pub const fn outcome(&self) -> &PathOutcome { &self.outcome }
}

/// Entry point for running the spanning-tree path pipeline.
///
/// # Examples
/// ```
/// use primpath_core::{PathOutcome, PrimPathBuilder, ProblemInput};
///
/// let input = ProblemInput::parse("4 4  0 1 1  1 2 2  2 3 3  0 3 10  0 3")?;
/// let output = PrimPathBuilder::new().build().run(&input)?;
/// assert_eq!(output.tree().total_weight(), 6);
/// let PathOutcome::Found(path) = output.outcome() else {
///     panic!("tree is connected");
/// };
/// assert_eq!(path.to_string(), "0 1 2 3");
/// # Ok::<(), primpath_core::PrimPathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PrimPath {
    root: VertexId,
    retain_tree: bool,
}

impl PrimPath {
    pub(crate) const fn new(root: VertexId, retain_tree: bool) -> Self {
        Self { root, retain_tree }
    }

    /// Returns the vertex the spanning tree is grown from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> VertexId { self.root }

    /// Returns whether graphs are kept in the output.
    #[must_use]
    #[rustfmt::skip]
    pub const fn retains_tree(&self) -> bool { self.retain_tree }

    /// Runs the pipeline over a parsed problem.
    ///
    /// # Errors
    /// Propagates graph validation errors from [`Graph::from_edges`],
    /// [`PrimPathError::InvalidRoot`] and [`PrimPathError::DisconnectedGraph`]
    /// from the spanning tree stage, and [`PrimPathError::InvalidQueryBounds`]
    /// when the query names a vertex outside the graph. A query whose
    /// endpoints the tree does not connect is reported as
    /// [`PathOutcome::NoPath`] rather than an error.
    #[instrument(
        name = "core.run",
        err,
        skip(self, input),
        fields(
            vertices = input.vertex_count(),
            edges = input.edges().len(),
            root = self.root,
        ),
    )]
    pub fn run(&self, input: &ProblemInput) -> Result<PipelineOutput> {
        let graph = Graph::from_edges(input.vertex_count(), input.edges())?;
        let (first, last) = input.query();
        self.solve(graph, first, last)
    }

    /// Runs the spanning tree and path stages over an already built graph.
    ///
    /// # Errors
    /// As [`Self::run`], minus the graph validation errors.
    pub fn solve(&self, graph: Graph, first: i64, last: i64) -> Result<PipelineOutput> {
        let tree = build_mst_from(&graph, self.root)?;
        let tree_graph = build_tree_paths(tree.parents())?;
        let (first, last) = query_bounds(first, last, tree_graph.vertex_count())?;

        let outcome = match find_path(&tree_graph, first, last) {
            Ok(path) => PathOutcome::Found(path),
            Err(PrimPathError::NoPathFound { first, last }) => {
                info!(first, last, "no path between query vertices");
                PathOutcome::NoPath { first, last }
            }
            Err(err) => return Err(err),
        };

        let (graph, tree_graph) = if self.retain_tree {
            (Some(graph), Some(tree_graph))
        } else {
            (None, None)
        };
        Ok(PipelineOutput {
            graph,
            tree,
            tree_graph,
            outcome,
        })
    }
}

fn query_bounds(first: i64, last: i64, vertex_count: usize) -> Result<(VertexId, VertexId)> {
    let in_range = |vertex: i64| usize::try_from(vertex).ok().filter(|&v| v < vertex_count);
    match (in_range(first), in_range(last)) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => {
            warn!(first, last, vertex_count, "path query out of bounds");
            Err(PrimPathError::InvalidQueryBounds {
                first,
                last,
                vertex_count,
            })
        }
    }
}
