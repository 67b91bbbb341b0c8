// benches/registry_performance.rs
//! Benchmarks for registry lookups and error construction.
//!
//! Known codes are expected to resolve without allocating; the fallback path
//! and error construction are measured for comparison.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::io;
use wasi_error_codes::{CodeName, ErrorCode, FileSystemError, name_of, write_table};

fn bench_name_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_of");

    for value in [0_i64, 20, 36, 37, -1, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, &v| {
            b.iter(|| name_of(black_box(v)))
        });
    }

    group.finish();
}

fn bench_code_name_display(c: &mut Criterion) {
    use std::fmt::Write;

    c.bench_function("code_name_display_unknown", |b| {
        let mut buf = String::with_capacity(32);
        b.iter(|| {
            buf.clear();
            write!(buf, "{}", CodeName(black_box(4242))).unwrap();
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for name in ["access", "cross-device", "not-a-code"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, n| {
            b.iter(|| black_box(n).parse::<ErrorCode>().is_ok())
        });
    }

    group.finish();
}

fn bench_error_construction(c: &mut Criterion) {
    c.bench_function("fs_error_static_context", |b| {
        b.iter(|| FileSystemError::new(black_box(ErrorCode::NoEntry), "open_at", "missing"))
    });

    c.bench_function("fs_error_from_io_path", |b| {
        b.iter(|| {
            FileSystemError::from_io_path(
                "open_at",
                String::from("/data/test_dir/test.txt"),
                io::Error::from(black_box(io::ErrorKind::NotFound)),
            )
        })
    });
}

fn bench_table(c: &mut Criterion) {
    c.bench_function("write_table", |b| {
        let mut buf = Vec::with_capacity(1024);
        b.iter(|| {
            buf.clear();
            write_table(&mut buf).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_name_of,
    bench_code_name_display,
    bench_parse,
    bench_error_construction,
    bench_table
);
criterion_main!(benches);
