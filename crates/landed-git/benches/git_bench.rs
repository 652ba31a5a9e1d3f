// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use landed_git::collect_entries;

fn sample_log(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            if i % 3 == 0 {
                format!("{i:07x}\0Merge pull request #{i} from octo/branch-{i}\0")
            } else {
                format!("{i:07x}\0Direct commit {i}\0tag: v{i}, origin/main")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parser_benchmark(c: &mut Criterion) {
    let small = sample_log(50);
    let large = sample_log(5_000);

    c.bench_function("collect_entries_50", |b| {
        b.iter(|| collect_entries(std::hint::black_box(&small)))
    });
    c.bench_function("collect_entries_5000", |b| {
        b.iter(|| collect_entries(std::hint::black_box(&large)))
    });
}

criterion_group!(benches, parser_benchmark);
criterion_main!(benches);
