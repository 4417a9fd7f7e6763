//! Fault-counting throughput per policy and reference length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{simulate, Algorithm, PageId};

/// Deterministic reference string with locality: mostly a small hot set,
/// with periodic strides into a larger cold range.
fn workload(len: usize) -> Vec<PageId> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let page = if state % 4 == 0 { state % 256 } else { state % 16 };
            PageId::new(page)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    for len in [1_000usize, 10_000, 100_000] {
        let refs = workload(len);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), len), &refs, |b, refs| {
                b.iter(|| simulate(algorithm, black_box(32), black_box(refs)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
