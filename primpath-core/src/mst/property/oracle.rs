//! Sequential Kruskal oracle for MST property verification.
//!
//! A deliberately simple implementation: sort every edge by cost and accept
//! it whenever it joins two components of a path-halving union-find.

/// Result of the Kruskal oracle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Total cost of the minimum spanning forest.
    pub total_weight: u64,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes the minimum spanning forest weight and component count.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[(usize, usize, u64)]) -> OracleResult {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|&(_, _, cost)| cost);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    let mut total_weight = 0_u64;
    for (left, right, cost) in sorted {
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            parent[right_root] = left_root;
            components -= 1;
            total_weight += cost;
        }
    }

    OracleResult {
        total_weight,
        component_count: components,
    }
}

fn find_root(parent: &mut [usize], vertex: usize) -> usize {
    let mut current = vertex;
    while parent[current] != current {
        let grandparent = parent[parent[current]];
        parent[current] = grandparent;
        current = grandparent;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_matches_hand_computed_weight() {
        let edges = [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)];
        let result = sequential_kruskal(4, &edges);
        assert_eq!(result.total_weight, 6);
        assert_eq!(result.component_count, 1);
    }

    #[test]
    fn oracle_counts_components() {
        let result = sequential_kruskal(5, &[(0, 1, 4), (2, 3, 1)]);
        assert_eq!(result.total_weight, 5);
        assert_eq!(result.component_count, 3);
    }
}
