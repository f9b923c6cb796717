//! Builder utilities for configuring the primpath pipeline.
//!
//! Collects the spanning-tree root and output retention options before
//! constructing a [`PrimPath`] runner.

use crate::{graph::VertexId, mst::DEFAULT_ROOT, pipeline::PrimPath};

/// Configures and constructs [`PrimPath`] runners.
///
/// # Examples
/// ```
/// use primpath_core::PrimPathBuilder;
///
/// let runner = PrimPathBuilder::new()
///     .with_root(2)
///     .with_retain_tree(true)
///     .build();
/// assert_eq!(runner.root(), 2);
/// assert!(runner.retains_tree());
/// ```
#[derive(Debug, Clone)]
pub struct PrimPathBuilder {
    root: VertexId,
    retain_tree: bool,
}

impl Default for PrimPathBuilder {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT,
            retain_tree: false,
        }
    }
}

impl PrimPathBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use primpath_core::PrimPathBuilder;
    ///
    /// let builder = PrimPathBuilder::new();
    /// assert_eq!(builder.root(), 0);
    /// assert!(!builder.retain_tree());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex Prim's algorithm grows the tree from.
    ///
    /// The root is checked against the graph when the pipeline runs, since
    /// the vertex count is only known then.
    #[must_use]
    pub const fn with_root(mut self, root: VertexId) -> Self {
        self.root = root;
        self
    }

    /// Returns the configured root vertex.
    #[must_use]
    pub const fn root(&self) -> VertexId {
        self.root
    }

    /// Keeps the input graph and the materialised tree graph in the
    /// pipeline output.
    ///
    /// # Examples
    /// ```
    /// use primpath_core::PrimPathBuilder;
    ///
    /// let builder = PrimPathBuilder::new().with_retain_tree(true);
    /// assert!(builder.retain_tree());
    /// ```
    #[must_use]
    pub const fn with_retain_tree(mut self, retain: bool) -> Self {
        self.retain_tree = retain;
        self
    }

    /// Returns whether graphs are retained in the output.
    #[must_use]
    pub const fn retain_tree(&self) -> bool {
        self.retain_tree
    }

    /// Constructs the immutable [`PrimPath`] runner.
    #[must_use]
    pub fn build(self) -> PrimPath {
        PrimPath::new(self.root, self.retain_tree)
    }
}
