// SPDX-License-Identifier: MIT OR Apache-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stars_select::{DepMatrixView, Stars, StarsConfig, SubsampleFamily};

// Small deterministic generator so the bench needs no RNG dependency.
fn next_score(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let unit = ((*state >> 11) as f64) / ((1u64 << 53) as f64);
    (unit - 0.5) * 0.02
}

fn synthetic_buffers(p: usize, n_subsamples: usize, path_len: usize) -> Vec<Vec<f64>> {
    let mut state = 0x5eed_u64;
    let mut buffers = Vec::with_capacity(n_subsamples * path_len);
    for _ in 0..n_subsamples {
        for position in 0..path_len {
            // Higher positions damp the scores toward sparser graphs.
            let damping = 1.0 / (1.0 + position as f64);
            let mut values = vec![0.0; p * p];
            for i in 0..p {
                for j in (i + 1)..p {
                    let score = next_score(&mut state) * damping;
                    values[i * p + j] = score;
                    values[j * p + i] = score;
                }
            }
            buffers.push(values);
        }
    }
    buffers
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("stars_select");
    let path_len = 10;
    let n_subsamples = 20;

    for &p in &[20usize, 50, 100] {
        let buffers = synthetic_buffers(p, n_subsamples, path_len);
        let rhos: Vec<f64> = (1..=path_len).map(|i| i as f64 * 0.05).collect();
        let families: Vec<SubsampleFamily<'_>> = (0..n_subsamples)
            .map(|sample| {
                let deps: Vec<DepMatrixView<'_>> = (0..path_len)
                    .map(|position| {
                        DepMatrixView::new(&buffers[sample * path_len + position], p)
                            .expect("bench buffer should be square")
                    })
                    .collect();
                SubsampleFamily::new(format!("s{sample}"), deps)
            })
            .collect();
        let stars = Stars::new(StarsConfig::default()).expect("default config should be valid");

        group.bench_with_input(BenchmarkId::new("select", p), &p, |b, _| {
            b.iter(|| {
                stars
                    .select(&rhos, &families)
                    .expect("bench selection should succeed")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
