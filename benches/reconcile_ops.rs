//! Benchmarks for resource reconciliation.
//!
//! Measures content fingerprinting and the populate/diff walks over
//! reference trees of increasing size.

use std::fs;
use std::path::Path;

use cas_overlay::fingerprint::fingerprint_reader;
use cas_overlay::reconcile::{self, Event};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;

/// Writes `num_files` template-like files under `root`.
fn create_tree(root: &Path, num_files: usize) {
    for i in 0..num_files {
        let path = root.join(format!("templates/fragment{}/page{}.html", i / 50, i));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("<html><body>page {}</body></html>\n", i)).unwrap();
    }
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");

    for size in [1024usize, 64 * 1024, 1024 * 1024] {
        let data = vec![b'x'; size];
        group.bench_with_input(BenchmarkId::new("bytes", size), &data, |b, data| {
            b.iter(|| fingerprint_reader(&mut black_box(data.as_slice())).unwrap())
        });
    }

    group.finish();
}

fn bench_populate(c: &mut Criterion) {
    let mut group = c.benchmark_group("populate");

    for count in [10, 100, 500] {
        let reference = TempDir::new().unwrap();
        create_tree(reference.path(), count);

        group.bench_with_input(
            BenchmarkId::new("empty_local", count),
            &count,
            |b, _| {
                b.iter(|| {
                    let local = TempDir::new().unwrap();
                    reconcile::populate(reference.path(), local.path(), &mut |_: &Event| {})
                        .unwrap()
                })
            },
        );

        let local = TempDir::new().unwrap();
        create_tree(local.path(), count);
        group.bench_with_input(BenchmarkId::new("in_sync", count), &count, |b, _| {
            b.iter(|| {
                reconcile::populate(reference.path(), local.path(), &mut |_: &Event| {}).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for count in [100, 500] {
        let reference = TempDir::new().unwrap();
        let local = TempDir::new().unwrap();
        create_tree(reference.path(), count);
        create_tree(local.path(), count / 2);

        group.bench_with_input(BenchmarkId::new("half_missing", count), &count, |b, _| {
            b.iter(|| reconcile::diff(reference.path(), local.path()).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fingerprint, bench_populate, bench_diff);
criterion_main!(benches);
