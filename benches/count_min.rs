//! Stream-rate benchmarks for the Count-Min sketch.
//!
//! Run with: `cargo bench --bench count_min`

use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use setkit::CountMinSketch;
use setkit::traits::FrequencyEstimator;

const OPS: u64 = 100_000;

fn bench_increment_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_min_increment_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("skewed_u64", |b| {
        b.iter_custom(|iters| {
            let mut sketch = CountMinSketch::new(5, 16_384);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    // Multiplicative hash skews the stream toward low keys.
                    let key = (i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 52) % 1024;
                    sketch.increment(&black_box(key));
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

fn bench_count_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_min_count_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("probe_u64", |b| {
        b.iter_custom(|iters| {
            let mut sketch = CountMinSketch::new(5, 16_384);
            for i in 0..OPS {
                sketch.increment(&(i % 4096));
            }
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    black_box(sketch.count(&black_box(i % 8192)));
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_increment_stream, bench_count_probe);
criterion_main!(benches);
