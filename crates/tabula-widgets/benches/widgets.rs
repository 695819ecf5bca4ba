//! Benchmarks for data table rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabula_core::{Brick, Event, MouseButton, Rect, RecordingCanvas, Widget};
use tabula_data::{Column, Record, TableOptions};
use tabula_widgets::{DataTable, TableRegion};

fn table(n: usize) -> DataTable {
    let records: Vec<Record> = (0..n)
        .map(|i| {
            Record::new()
                .field("name", format!("user_{i}"))
                .field("age", (i % 80) as f64)
        })
        .collect();
    let mut table = DataTable::new([Column::new("Name", "name"), Column::new("Age", "age")])
        .options(TableOptions::default().page_size(25))
        .records(records);
    table.layout(Rect::new(0.0, 0.0, 1280.0, 1200.0));
    table
}

fn bench_paint_page(c: &mut Criterion) {
    let t = table(10_000);
    c.bench_function("paint_page_25", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            t.paint(&mut canvas);
            black_box(canvas.command_count())
        })
    });
}

fn bench_to_html(c: &mut Criterion) {
    let t = table(10_000);
    c.bench_function("to_html_page_25", |b| b.iter(|| black_box(t.to_html())));
}

fn bench_typing(c: &mut Criterion) {
    c.bench_function("type_filter_10k", |b| {
        b.iter_batched(
            || {
                let mut t = table(10_000);
                if let Some(filter) = t.region_bounds(TableRegion::Filter) {
                    t.event(&Event::MouseDown {
                        position: filter.center(),
                        button: MouseButton::Left,
                    });
                }
                t
            },
            |mut t| {
                for ch in ["u", "s", "e", "r", "_", "9"] {
                    t.event(&Event::TextInput { text: ch.to_string() });
                }
                t
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_paint_page, bench_to_html, bench_typing);
criterion_main!(benches);
