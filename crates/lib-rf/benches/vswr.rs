//! VSWR transform performance benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lib_rf::build_curve;
use lib_types::{MegaHertz, Ohms, SweepSample};

fn bench_build_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_curve");

    // A full-spectrum sweep at increasing point counts.
    for sample_count in [1_000, 10_000, 100_000].iter() {
        let samples: Vec<SweepSample> = (0..*sample_count)
            .map(|i| {
                let f = 1.8 + (i as f64) * (450.0 - 1.8) / *sample_count as f64;
                SweepSample::new(
                    MegaHertz(f),
                    50.0 + 30.0 * (f * 0.13).sin(),
                    25.0 * (f * 0.07).cos(),
                )
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(sample_count),
            &samples,
            |b, s| {
                b.iter(|| build_curve(black_box(s), Ohms::Z0_50));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_curve);
criterion_main!(benches);
