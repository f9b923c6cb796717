//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

/// Weight distribution strategy for generated graphs.
///
/// Each variant stresses a different part of Prim's builder: tie handling
/// in the linear scan, repeated relaxation, or the disconnection check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Edge costs drawn from a wide range, so the MST is almost always unique.
    Unique,
    /// Costs drawn from a pool of one to three values.
    ManyIdentical,
    /// A random spanning path plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// Two to four components with no edges between them.
    Disconnected,
}

/// Fixture for MST property tests.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated `(left, right, cost)` triples with no repeated pair.
    pub edges: Vec<(usize, usize, u64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Returns `true` when the generator built the graph to be connected.
    pub(super) fn expect_connected(&self) -> bool {
        self.distribution != WeightDistribution::Disconnected
    }
}
