//! Graph generators for MST property-based tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so rstest cases can
//! pin a seed while proptest samples seeds freely. Generated graphs never
//! contain self-loops or a repeated vertex pair.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            connected_graph(rng, vertex_count, 0.3, distribution, |r| r.gen_range(0..1_000_000))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(0..=10))
                .collect();
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            connected_graph(rng, vertex_count, 0.5, distribution, move |r| {
                pool.choose(r).copied().unwrap_or(1)
            })
        }
        WeightDistribution::Sparse => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            sparse_graph(rng, vertex_count)
        }
        WeightDistribution::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            connected_graph(rng, vertex_count, 0.85, distribution, |r| r.gen_range(0..100))
        }
        WeightDistribution::Disconnected => disconnected_graph(rng),
    }
}

/// Accumulates edges while rejecting repeated pairs.
#[derive(Default)]
struct EdgeSet {
    edges: Vec<(usize, usize, u64)>,
    seen: HashSet<(usize, usize)>,
}

impl EdgeSet {
    fn push(&mut self, left: usize, right: usize, cost: u64) {
        if left == right {
            return;
        }
        let key = (left.min(right), left.max(right));
        if self.seen.insert(key) {
            self.edges.push((left, right, cost));
        }
    }

    /// Links `vertices` into one component by attaching each vertex to a
    /// random earlier one.
    fn random_tree(
        &mut self,
        rng: &mut SmallRng,
        vertices: &[usize],
        mut cost: impl FnMut(&mut SmallRng) -> u64,
    ) {
        for (index, &vertex) in vertices.iter().enumerate().skip(1) {
            let anchor = vertices[rng.gen_range(0..index)];
            let weight = cost(rng);
            self.push(vertex, anchor, weight);
        }
    }
}

fn connected_graph(
    rng: &mut SmallRng,
    vertex_count: usize,
    edge_probability: f64,
    distribution: WeightDistribution,
    mut cost: impl FnMut(&mut SmallRng) -> u64,
) -> MstFixture {
    let mut set = EdgeSet::default();
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    set.random_tree(rng, &order, &mut cost);

    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let weight = cost(rng);
                set.push(left, right, weight);
            }
        }
    }

    MstFixture {
        vertex_count,
        edges: set.edges,
        distribution,
    }
}

fn sparse_graph(rng: &mut SmallRng, vertex_count: usize) -> MstFixture {
    let mut set = EdgeSet::default();
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        let weight = rng.gen_range(0..500);
        set.push(pair[0], pair[1], weight);
    }

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(0..500);
        set.push(left, right, weight);
    }

    MstFixture {
        vertex_count,
        edges: set.edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Splits a shuffled vertex range into two to four components and links
/// each one internally.
fn disconnected_graph(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=4);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut set = EdgeSet::default();
    let mut offset = 0;
    for size in sizes {
        let members = &order[offset..offset + size];
        set.random_tree(rng, members, |r| r.gen_range(0..50));
        offset += size;
    }

    MstFixture {
        vertex_count,
        edges: set.edges,
        distribution: WeightDistribution::Disconnected,
    }
}
