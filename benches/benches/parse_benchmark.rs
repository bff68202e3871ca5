//! Row parsing benchmarks.
//!
//! Run with: `cargo bench --package histquote-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use histquote_bench::{bar_table, dividend_table};
use histquote_fetch::{CancellationToken, SortOrder, collect_records, sort_by_timestamp};
use histquote_types::{DividendTick, PriceBar};
use std::hint::black_box;

/// Roughly one, ten and thirty years of daily bars.
const BAR_ROWS: [usize; 3] = [252, 2_520, 7_560];

fn parse_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let token = CancellationToken::new();

    let mut group = c.benchmark_group("parse_bars");
    for rows in BAR_ROWS {
        let body = bar_table(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &body, |b, body| {
            b.to_async(&runtime).iter(|| async {
                let mut bars: Vec<PriceBar> =
                    collect_records(black_box(body.as_bytes()), &token).await.unwrap();
                sort_by_timestamp(&mut bars, SortOrder::Ascending);
                bars
            });
        });
    }
    group.finish();

    let body = dividend_table(200);
    c.bench_function("parse_dividends/200", |b| {
        b.to_async(&runtime).iter(|| async {
            let ticks: Vec<DividendTick> =
                collect_records(black_box(body.as_bytes()), &token).await.unwrap();
            ticks
        });
    });
}

criterion_group!(benches, parse_benchmark);
criterion_main!(benches);
