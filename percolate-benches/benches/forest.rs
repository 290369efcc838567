//! Disjoint-set forest benchmarks.
//!
//! Measures a chain of unions followed by a full round of finds, the access
//! pattern the labeller's two passes produce on a fully occupied row.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use percolate_benches::params::ForestBenchParams;
use percolate_core::DisjointForest;

/// Forest sizes to benchmark.
const NODE_COUNTS: &[usize] = &[1_024, 65_536, 1_048_576];

fn unite_chain_then_find(node_count: usize) -> usize {
    let mut forest = DisjointForest::new(node_count);
    for node in 1..node_count {
        forest.unite(node, node - 1);
    }
    (0..node_count).map(|node| forest.find(node)).sum()
}

fn forest(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_forest");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        group.bench_with_input(
            BenchmarkId::from_parameter(ForestBenchParams { node_count }),
            &node_count,
            |b, &node_count| b.iter(|| unite_chain_then_find(node_count)),
        );
    }

    group.finish();
}

criterion_group!(benches, forest);
criterion_main!(benches);
