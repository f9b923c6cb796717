//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree over a
//! shuffled vertex order comes first, then extra edges according to the
//! requested [`Density`]. Repeated vertex pairs and self-loops are skipped so
//! the result always passes graph validation.

use std::collections::HashSet;
use std::fmt;

use primpath_core::{Graph, ProblemInput, RawEdge};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// How many edges beyond the spanning tree a graph receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    /// About `extra_per_vertex` random edges per vertex.
    Sparse {
        /// Random edge attempts per vertex.
        extra_per_vertex: usize,
    },
    /// Every vertex pair is connected.
    Complete,
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sparse { extra_per_vertex } => write!(f, "sparse+{extra_per_vertex}"),
            Self::Complete => f.write_str("complete"),
        }
    }
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edge density.
    pub density: Density,
    /// Upper bound, inclusive, for edge costs.
    pub max_cost: u64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A connected graph described as raw edge triples.
///
/// # Examples
///
/// ```
/// use primpath_benches::source::{Density, SyntheticGraph, SyntheticGraphConfig};
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 10,
///     density: Density::Sparse { extra_per_vertex: 2 },
///     max_cost: 100,
///     seed: 7,
/// };
/// let synthetic = SyntheticGraph::generate(&config)?;
/// let graph = synthetic.graph()?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert!(graph.edge_count() >= 9);
/// # Ok::<(), primpath_benches::error::BenchSetupError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: i64,
    edges: Vec<RawEdge>,
}

impl SyntheticGraph {
    /// Generates a connected graph from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BenchSetupError::InvalidConfig`] if `vertex_count` is zero
    /// and [`BenchSetupError::Overflow`] if a vertex id or cost does not fit
    /// the signed input representation.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::InvalidConfig {
                reason: "vertex count must be greater than zero",
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut pairs = PairSet::default();

        let mut order: Vec<usize> = (0..config.vertex_count).collect();
        order.shuffle(&mut rng);
        for (index, &vertex) in order.iter().enumerate().skip(1) {
            if let Some(&anchor) = order.get(rng.gen_range(0..index)) {
                pairs.push(vertex, anchor, rng.gen_range(0..=config.max_cost));
            }
        }

        match config.density {
            Density::Sparse { extra_per_vertex } => {
                let attempts = config.vertex_count.saturating_mul(extra_per_vertex);
                for _ in 0..attempts {
                    let left = rng.gen_range(0..config.vertex_count);
                    let right = rng.gen_range(0..config.vertex_count);
                    pairs.push(left, right, rng.gen_range(0..=config.max_cost));
                }
            }
            Density::Complete => {
                for left in 0..config.vertex_count {
                    for right in (left + 1)..config.vertex_count {
                        pairs.push(left, right, rng.gen_range(0..=config.max_cost));
                    }
                }
            }
        }

        let edges = pairs
            .edges
            .into_iter()
            .map(|(left, right, cost)| -> Result<RawEdge, BenchSetupError> {
                Ok(RawEdge::new(
                    signed(left, "vertex id")?,
                    signed(right, "vertex id")?,
                    i64::try_from(cost).map_err(|_| BenchSetupError::Overflow {
                        context: "edge cost",
                    })?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vertex_count: signed(config.vertex_count, "vertex count")?,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> i64 {
        self.vertex_count
    }

    /// Returns the edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[RawEdge] {
        &self.edges
    }

    /// Builds the validated graph store.
    ///
    /// # Errors
    ///
    /// Returns [`BenchSetupError::Core`] if validation fails, which a
    /// generated graph never does.
    pub fn graph(&self) -> Result<Graph, BenchSetupError> {
        Ok(Graph::from_edges(self.vertex_count, &self.edges)?)
    }

    /// Wraps the graph in a problem asking for the path from `first` to
    /// `last`.
    #[must_use]
    pub fn problem(&self, first: i64, last: i64) -> ProblemInput {
        ProblemInput::new(self.vertex_count, self.edges.clone(), first, last)
    }
}

fn signed(value: usize, context: &'static str) -> Result<i64, BenchSetupError> {
    i64::try_from(value).map_err(|_| BenchSetupError::Overflow { context })
}

#[derive(Default)]
struct PairSet {
    edges: Vec<(usize, usize, u64)>,
    seen: HashSet<(usize, usize)>,
}

impl PairSet {
    fn push(&mut self, left: usize, right: usize, cost: u64) {
        if left != right && self.seen.insert((left.min(right), left.max(right))) {
            self.edges.push((left, right, cost));
        }
    }
}
