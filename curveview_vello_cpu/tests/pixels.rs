// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel probes of views rendered with `vello_cpu`.

use curveview::{CurveConfig, CurveSurface, CurveView};
use curveview_vello_cpu::{VelloCpuCurveSurface, render_to_rgba8};
use kurbo::{Rect, Shape};
use peniko::Brush;
use peniko::color::palette::css;
use vello_cpu::{Pixmap, RenderContext};

const WIDTH: u16 = 400;
const HEIGHT: u16 = 300;

fn render(config: CurveConfig) -> Vec<u8> {
    let mut view = CurveView::new(config);
    view.on_resize(f64::from(WIDTH), f64::from(HEIGHT));
    render_to_rgba8(&view, WIDTH, HEIGHT)
}

fn pixel(rgba: &[u8], x: usize, y: usize) -> [u8; 4] {
    let i = (y * usize::from(WIDTH) + x) * 4;
    [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
}

#[test]
fn unsized_view_is_transparent() {
    let view = CurveView::new(CurveConfig::default());
    let rgba = render_to_rgba8(&view, 16, 16);
    assert!(rgba.chunks_exact(4).all(|p| p[3] == 0));
}

#[test]
fn area_above_curve_is_filled_with_gradient() {
    let rgba = render(CurveConfig::default());

    // Before the gradient start, the start color is padded.
    let [r, g, b, a] = pixel(&rgba, 5, 5);
    assert_eq!(a, 255);
    assert!(r < 40 && g > 215 && b > 215, "expected cyan, got {r} {g} {b}");

    // Past the end point (lower right of the fill) the end color is padded.
    let [r, g, b, a] = pixel(&rgba, 395, 200);
    assert_eq!(a, 255);
    assert!(r > 215 && g > 215 && b < 40, "expected yellow, got {r} {g} {b}");
}

#[test]
fn area_below_curve_is_empty() {
    let rgba = render(CurveConfig::default());
    // Below the corrected baseline.
    assert_eq!(pixel(&rgba, 200, 295)[3], 0);
    // Under the upward swing of the wave.
    assert_eq!(pixel(&rgba, 255, 240)[3], 0);
}

#[test]
fn custom_shadow_darkens_below_the_edge() {
    let plain = render(CurveConfig::default());
    let shadowed = render(CurveConfig::default().with_shadow(12.0, css::BLACK));

    // Just under the left end of the curve.
    assert_eq!(pixel(&plain, 10, 285)[3], 0);
    assert!(pixel(&shadowed, 10, 285)[3] > 0);
}

#[test]
fn shadow_leaves_translucent_interior_untouched() {
    let translucent = css::WHITE.with_alpha(0.5);
    let config = CurveConfig::default().with_colors(translucent, translucent);
    let plain = render(config);
    let shadowed = render(config.with_shadow(12.0, css::BLACK));

    // Well inside the outline.
    assert_eq!(pixel(&shadowed, 100, 50), pixel(&plain, 100, 50));
    assert_eq!(pixel(&shadowed, 300, 150), pixel(&plain, 300, 150));
    // The shadow still shows outside.
    assert!(pixel(&shadowed, 10, 285)[3] > pixel(&plain, 10, 285)[3]);
}

#[test]
fn solid_brush_fills_path() {
    let mut ctx = RenderContext::new(32, 32);
    let path = Rect::new(0.0, 0.0, 16.0, 32.0).to_path(0.1);
    VelloCpuCurveSurface::new(&mut ctx).fill_path(&path, &Brush::Solid(css::RED));
    ctx.flush();
    let mut pixmap = Pixmap::new(32, 32);
    ctx.render_to_pixmap(&mut pixmap);
    let pixels = pixmap.take_unpremultiplied();

    let inside = pixels[8 * 32 + 4];
    assert_eq!([inside.r, inside.g, inside.b, inside.a], [255, 0, 0, 255]);
    let outside = pixels[8 * 32 + 28];
    assert_eq!(outside.a, 0);
}
