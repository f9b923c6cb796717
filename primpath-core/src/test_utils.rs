//! Shared test utilities for `primpath-core`.

use primpath_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Graph, RawEdge};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `PRIMPATH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(left, right, cost)` triples, panicking on invalid
/// input.
#[must_use]
pub(crate) fn graph_from(vertex_count: i64, edges: &[(i64, i64, i64)]) -> Graph {
    let raw: Vec<RawEdge> = edges
        .iter()
        .map(|&(left, right, cost)| RawEdge::new(left, right, cost))
        .collect();
    match Graph::from_edges(vertex_count, &raw) {
        Ok(graph) => graph,
        Err(err) => panic!("fixture graph must be valid: {err}"),
    }
}
