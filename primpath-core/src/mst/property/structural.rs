//! Property runners for Prim's MST builder.
//!
//! - **Tree shape**: exactly one root, every other vertex has a parent, and
//!   walking parents from any vertex reaches the root within `V` steps.
//! - **Edge fidelity**: every `(child, parent)` pair is an edge of the input
//!   graph and its recorded cost matches that edge.
//! - **Minimality**: the total weight equals the Kruskal oracle's.
//! - **Disconnection**: inputs with several components are rejected.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::error::PrimPathError;
use crate::graph::{Graph, HalfEdge};
use crate::mst::{SpanningTree, build_mst};

use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Builds the input graph for `fixture`.
pub(super) fn fixture_graph(fixture: &MstFixture) -> Result<Graph, TestCaseError> {
    let mut graph = Graph::with_vertex_count(fixture.vertex_count)
        .map_err(|err| TestCaseError::fail(format!("allocation failed: {err}")))?;
    for &(left, right, cost) in &fixture.edges {
        graph
            .insert_edge(left, right, cost)
            .map_err(|err| TestCaseError::fail(format!("fixture edge rejected: {err}")))?;
    }
    Ok(graph)
}

/// Runs every structural property for `fixture`.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture_graph(fixture)?;
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);
    let outcome = build_mst(&graph);

    if !fixture.expect_connected() {
        return match outcome {
            Err(PrimPathError::DisconnectedGraph { vertex_count, .. })
                if vertex_count == fixture.vertex_count =>
            {
                Ok(())
            }
            other => Err(TestCaseError::fail(format!(
                "expected DisconnectedGraph for {} components, got {other:?}",
                oracle.component_count
            ))),
        };
    }

    let tree = outcome.map_err(|err| {
        TestCaseError::fail(format!(
            "build_mst failed: {err} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;

    validate_tree_shape(&tree)?;
    validate_edge_fidelity(&graph, &tree)?;
    if tree.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "weight mismatch: prim={} oracle={}",
            tree.total_weight(),
            oracle.total_weight
        )));
    }
    Ok(())
}

fn validate_tree_shape(tree: &SpanningTree) -> TestCaseResult {
    let roots = tree.parents().iter().filter(|parent| parent.is_none()).count();
    if roots != 1 {
        return Err(TestCaseError::fail(format!("expected one root, found {roots}")));
    }
    let vertex_count = tree.vertex_count();
    for start in 0..vertex_count {
        let mut current = start;
        let mut steps = 0;
        while let Some(parent) = tree.parent(current) {
            current = parent;
            steps += 1;
            if steps > vertex_count {
                return Err(TestCaseError::fail(format!(
                    "parent walk from {start} does not terminate"
                )));
            }
        }
        if Some(current) != tree.root() {
            return Err(TestCaseError::fail(format!(
                "parent walk from {start} ends at {current}, not the root"
            )));
        }
    }
    Ok(())
}

fn validate_edge_fidelity(graph: &Graph, tree: &SpanningTree) -> TestCaseResult {
    for (child, parent, cost) in tree.edges() {
        let edge = graph
            .neighbors(child)
            .iter()
            .find(|edge| edge.neighbor() == parent)
            .map(HalfEdge::cost);
        if edge != Some(cost) {
            return Err(TestCaseError::fail(format!(
                "tree edge ({child}, {parent}, {cost}) does not match graph edge {edge:?}"
            )));
        }
    }
    Ok(())
}
