//! Layout pass benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spangrid_core::{Constraints, LayoutConfig, LayoutError, Size, SpanAssignment, WidthBreakpoint};
use spangrid_layout::{plan_rows, LayoutEngine, LayoutItem, Measurable, SpanGrid};

struct Block(i32);

impl Measurable for Block {
    fn measure(&self, constraints: Constraints) -> Result<Size, LayoutError> {
        Ok(Size::new(constraints.min_width, self.0.max(constraints.min_height)))
    }
}

fn dashboard(count: usize) -> Vec<LayoutItem<Block>> {
    (0..count)
        .map(|i| {
            let spans = SpanAssignment::new(12, [6, 12, 4][i % 3], [3, 4, 6][i % 3]);
            LayoutItem::new(Block(40 + (i % 5) as i32 * 10), spans)
        })
        .collect()
}

fn calendar() -> Vec<LayoutItem<SpanGrid<Block>>> {
    let week = LayoutConfig::default()
        .with_total_spans(7)
        .with_inter_row_spacing(4.0);
    (0..12)
        .map(|month| {
            let days = (0..38 - month % 3)
                .map(|_| LayoutItem::new(Block(20), SpanAssignment::uniform(1)))
                .collect();
            let grid = SpanGrid::new(week.clone(), WidthBreakpoint::Expanded, days);
            LayoutItem::new(grid, SpanAssignment::new(12, 6, 4))
        })
        .collect()
}

fn plan_only(c: &mut Criterion) {
    let spans: Vec<u32> = (0..1000).map(|i| [3, 4, 6, 12][i % 4]).collect();
    c.bench_function("plan_rows_1000", |b| {
        b.iter(|| plan_rows(black_box(&spans), 12))
    });
}

fn layout_flat(c: &mut Criterion) {
    let items = dashboard(500);
    let engine = LayoutEngine::new(LayoutConfig::new(1440).with_gutter_space(8.0).with_inter_row_spacing(8.0));
    c.bench_function("layout_flat_500", |b| {
        b.iter(|| engine.layout(black_box(&items), WidthBreakpoint::Expanded))
    });
}

fn layout_stretched(c: &mut Criterion) {
    let items = dashboard(500);
    let engine = LayoutEngine::new(LayoutConfig::new(1440).with_gutter_space(8.0).with_stretch_to_fill_row(true));
    c.bench_function("layout_stretched_500", |b| {
        b.iter(|| engine.layout(black_box(&items), WidthBreakpoint::Medium))
    });
}

fn layout_nested(c: &mut Criterion) {
    let months = calendar();
    let engine = LayoutEngine::new(LayoutConfig::new(1440).with_gutter_space(8.0).with_stretch_to_fill_row(true));
    c.bench_function("layout_nested_calendar", |b| {
        b.iter(|| engine.layout(black_box(&months), WidthBreakpoint::Expanded))
    });
}

criterion_group!(benches, plan_only, layout_flat, layout_stretched, layout_nested);
criterion_main!(benches);
