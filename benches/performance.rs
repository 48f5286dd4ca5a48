//! Performance benchmarks for the log extractor
//!
//! These benchmarks measure token extraction, record formatting, and the
//! full scan loop over in-memory input of varying size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use perflog_extractor::{
    extractor::LatencyExtractor,
    models::LatencyRecord,
};
use std::hint::black_box;
use std::io::Cursor;

/// Create an in-memory log with the given number of lines
///
/// Every third line carries the marker so the scan exercises both the
/// match and the skip paths.
fn create_sample_log(lines: usize) -> String {
    let mut log = String::new();
    for i in 0..lines {
        if i % 3 == 0 {
            log.push_str(&format!("Request Avg Latency:{}us\n", 100 + i % 5000));
        } else {
            log.push_str(&format!("iteration {} completed with status ok\n", i));
        }
    }
    log
}

fn bench_extract_micros(c: &mut Criterion) {
    let extractor = LatencyExtractor::new();

    let mut group = c.benchmark_group("extract_micros");
    for line in [
        "Request Avg Latency:1500us",
        "stage:Avg:total:750us",
        "Avg: 1500us per iteration",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(line), line, |b, line| {
            b.iter(|| extractor.extract_micros(black_box(line)).unwrap());
        });
    }
    group.finish();
}

fn bench_format_millis(c: &mut Criterion) {
    let record = LatencyRecord::new(1, 123456);

    c.bench_function("format_millis", |b| {
        b.iter(|| black_box(&record).format_millis());
    });
}

fn bench_full_scan(c: &mut Criterion) {
    let extractor = LatencyExtractor::new();

    let mut group = c.benchmark_group("scan");
    for lines in [100usize, 1_000, 10_000] {
        let log = create_sample_log(lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &log, |b, log| {
            b.iter(|| {
                let mut total = 0i64;
                extractor
                    .scan(Cursor::new(log.as_bytes()), |record| {
                        total += record.microseconds;
                        Ok(())
                    })
                    .unwrap();
                black_box(total)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract_micros, bench_format_millis, bench_full_scan);
criterion_main!(benches);
