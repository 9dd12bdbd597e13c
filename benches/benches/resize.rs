// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use curveview::geometry::{control_points, highest_point};
use curveview::{CurveConfig, CurveView};
use curveview_vello_cpu::render_to_rgba8;
use kurbo::Size;

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("curveview/geometry");
    let config = CurveConfig::default();

    group.bench_function("highest_point", |b| {
        let points = control_points(Size::new(1080.0, 600.0), &config);
        b.iter(|| black_box(highest_point(black_box(&points))));
    });

    // Full recompute on every resize: geometry, outline, gradient, convexity.
    group.bench_function("on_resize", |b| {
        let mut view = CurveView::new(config);
        let mut w = 800.0;
        b.iter(|| {
            w = if w > 1600.0 { 800.0 } else { w + 1.0 };
            view.on_resize(black_box(w), 600.0);
        });
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("curveview/vello_cpu");
    group.sample_size(20);

    for radius in [0.0, 16.0] {
        let stock = CurveConfig::default();
        let mut view = CurveView::new(stock.with_shadow(radius, stock.shadow_color));
        view.on_resize(540.0, 300.0);
        group.bench_with_input(BenchmarkId::new("render", radius), &view, |b, view| {
            b.iter(|| black_box(render_to_rgba8(view, 540, 300)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geometry, bench_render);
criterion_main!(benches);
