//! Scoring benchmarks.
//!
//! Run with: `cargo bench -p bescore-core --bench scoring`
//!
//! Measures the cost of the three scoring stages:
//!
//! - **Pool build**: hashing every reference BE into the count table
//! - **Single summary**: per-reference aggregation plus combining
//! - **Batch**: rayon fan-out over many peer summaries

use bescore_core::element::{BasicElement, BePart};
use bescore_core::evaluation::{
    jackknife, Candidate, Combiner, EvalConfig, Evaluator, ReferencePool, TallyFunction,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

// =============================================================================
// Configuration
// =============================================================================

/// Reference counts typical of multi-reference summarization datasets.
const REFERENCE_COUNTS: &[usize] = &[2, 4, 8];

/// BEs per summary.
const ELEMENTS_PER_SUMMARY: usize = 60;

/// Size of the vocabulary BEs are drawn from. Smaller means more overlap.
const VOCABULARY: u64 = 400;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Deterministic pseudo-random index from a seed.
fn seeded_index(seed: u64, i: u64) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    i.hash(&mut hasher);
    hasher.finish() % VOCABULARY
}

/// A summary of head/modifier BEs; every fifth BE carries a numeric part.
fn seeded_summary(seed: u64) -> Vec<BasicElement> {
    (0..ELEMENTS_PER_SUMMARY as u64)
        .map(|i| {
            let n = seeded_index(seed, i);
            let head = BePart::new(format!("head{}", n % 50));
            let modifier = if n % 5 == 0 {
                BePart::numeric(format!("{}k", n))
            } else {
                BePart::new(format!("mod{n}"))
            };
            BasicElement::new(vec![head, modifier])
        })
        .collect()
}

fn seeded_references(count: usize) -> Vec<Vec<BasicElement>> {
    (0..count as u64).map(seeded_summary).collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_pool_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring/pool_build");

    for &count in REFERENCE_COUNTS {
        let references = seeded_references(count);
        group.throughput(Throughput::Elements((count * ELEMENTS_PER_SUMMARY) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &references, |b, refs| {
            b.iter(|| ReferencePool::new(black_box(refs)));
        });
    }
    group.finish();
}

fn bench_single_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring/single_summary");
    let peer = seeded_summary(10_000);

    for &count in REFERENCE_COUNTS {
        let pool = ReferencePool::new(&seeded_references(count));
        for tally in [TallyFunction::Binary, TallyFunction::Log, TallyFunction::BeLength] {
            let evaluator = Evaluator::new(EvalConfig::new(tally, Combiner::Jackknife));
            group.bench_with_input(
                BenchmarkId::new(tally.as_str(), count),
                &pool,
                |b, pool| {
                    b.iter(|| evaluator.evaluate(Candidate::peer(black_box(&peer)), pool));
                },
            );
        }
    }
    group.finish();
}

fn bench_jackknife(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring/jackknife");

    for &count in &[2usize, 4, 8, 16] {
        let recall: Vec<f64> = (0..count).map(|i| i as f64 / count as f64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &recall, |b, recall| {
            b.iter(|| jackknife(&[], black_box(recall), false));
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring/batch");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(5));

    let pool = ReferencePool::new(&seeded_references(4));
    let evaluator = Evaluator::default();

    for &size in &[10usize, 100, 1_000] {
        let peers: Vec<Vec<BasicElement>> =
            (0..size as u64).map(|i| seeded_summary(20_000 + i)).collect();
        let candidates: Vec<Candidate<'_>> = peers.iter().map(|p| Candidate::peer(p)).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, cands| {
            b.iter(|| evaluator.evaluate_batch(black_box(cands), &pool));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_pool_build,
    bench_single_summary,
    bench_jackknife,
    bench_batch
);
criterion_main!(benches);
