//! End-to-end pipeline benchmarks.
//!
//! Times `PrimPath::run` from raw edge triples to the answered query:
//! validation, Prim's builder, the tree graph, and the depth-first search.
//! The query joins the two highest-numbered vertices, which usually sit
//! far apart in the tree.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use primpath_benches::{
    error::BenchSetupError,
    params::GraphBenchParams,
    source::{Density, SyntheticGraph, SyntheticGraphConfig},
};
use primpath_core::PrimPathBuilder;

/// Seed used for all synthetic graph generation in this benchmark.
const SEED: u64 = 7;

/// Largest generated edge cost.
const MAX_COST: u64 = 1_000;

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[100, 1_000, 4_000];

fn pipeline_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);
    let runner = PrimPathBuilder::new().build();

    for &vertex_count in VERTEX_COUNTS {
        let params = GraphBenchParams {
            vertex_count,
            density: Density::Sparse { extra_per_vertex: 3 },
        };
        let synthetic = SyntheticGraph::generate(&SyntheticGraphConfig {
            vertex_count,
            density: params.density,
            max_cost: MAX_COST,
            seed: SEED,
        })?;
        let last = synthetic.vertex_count().saturating_sub(1);
        let problem = synthetic.problem(last.saturating_sub(1).max(0), last);

        group.bench_with_input(BenchmarkId::from_parameter(params), &problem, |b, problem| {
            b.iter(|| runner.run(problem));
        });
    }

    group.finish();
    Ok(())
}

fn pipeline(c: &mut Criterion) {
    if let Err(err) = pipeline_impl(c) {
        panic!("pipeline benchmark setup failed: {err}");
    }
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
