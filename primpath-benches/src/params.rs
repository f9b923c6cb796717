//! Benchmark parameter types.

use std::fmt;

use crate::source::Density;

/// Parameters for one graph-size benchmark point.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Edge density of the generated graph.
    pub density: Density,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{}", self.vertex_count, self.density)
    }
}
