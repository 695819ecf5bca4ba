//! Benchmarks for the filter/sort/paginate pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabula_data::{
    filter_indices, recompute, sort_indices, Column, Record, SortDirection, SortState, Table,
    TableAction, TableState,
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name"),
        Column::new("Age", "age"),
        Column::new("Joined", "joined"),
    ]
}

fn records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::new()
                .field("name", format!("user_{i}"))
                .field("age", (i % 80) as f64)
                .field("joined", format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1))
        })
        .collect()
}

fn bench_filter_10k(c: &mut Criterion) {
    let data = records(10_000);
    let cols = columns();
    c.bench_function("filter_10k", |b| {
        b.iter(|| filter_indices(black_box(&data), &cols, black_box("user_99")))
    });
}

fn bench_sort_10k(c: &mut Criterion) {
    let data = records(10_000);
    let all: Vec<usize> = (0..data.len()).collect();
    let sort = SortState::by("age", SortDirection::Descending);
    c.bench_function("sort_10k", |b| {
        b.iter(|| sort_indices(black_box(&data), &all, &sort))
    });
}

fn bench_recompute_10k(c: &mut Criterion) {
    let data = records(10_000);
    let cols = columns();
    let state = TableState::new(25);
    c.bench_function("recompute_10k", |b| {
        b.iter(|| recompute(black_box(&data), &cols, &state))
    });
}

fn bench_page_navigation_cached(c: &mut Criterion) {
    let mut table = Table::new(columns()).with_records(records(10_000));
    c.bench_function("next_page_cached_10k", |b| {
        b.iter(|| {
            if !table.dispatch(TableAction::NextPage) {
                table.dispatch(TableAction::FirstPage);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_filter_10k,
    bench_sort_10k,
    bench_recompute_10k,
    bench_page_navigation_cached,
);
criterion_main!(benches);
