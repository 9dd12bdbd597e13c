// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=curveview_vello_cpu --heading-base-level=0

//! Vello CPU–backed drawing for [`CurveView`].
//!
//! This crate implements [`CurveSurface`] on top of the sparse-strips
//! [`vello_cpu::RenderContext`], and offers [`render_to_rgba8`] for hosts
//! that just want pixels.
//!
//! ```rust
//! use curveview::{CurveConfig, CurveView};
//! use curveview_vello_cpu::render_to_rgba8;
//!
//! let mut view = CurveView::new(CurveConfig::default());
//! view.on_resize(400.0, 300.0);
//! let rgba = render_to_rgba8(&view, 400, 300);
//! assert_eq!(rgba.len(), 400 * 300 * 4);
//! ```

#![deny(unsafe_code)]
#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use curveview::{CurveSurface, CurveView, ShadowPaint};
use kurbo::{BezPath, Shape};
use peniko::{Brush, Fill};
use vello_common::filter_effects::{EdgeMode, Filter, FilterPrimitive};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

/// Blur reach, in standard deviations, covered by the shadow clip.
const BLUR_EXTENT_SIGMAS: f64 = 3.0;

/// [`CurveSurface`] drawing into a `vello_cpu` render context.
pub struct VelloCpuCurveSurface<'ctx> {
    /// Underlying Vello CPU render context to draw into.
    pub ctx: &'ctx mut RenderContext,
}

impl fmt::Debug for VelloCpuCurveSurface<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VelloCpuCurveSurface { .. }")
    }
}

impl<'ctx> VelloCpuCurveSurface<'ctx> {
    /// Create a surface that renders into the given CPU render context.
    pub fn new(ctx: &'ctx mut RenderContext) -> Self {
        ctx.set_fill_rule(Fill::NonZero);
        Self { ctx }
    }

    /// Sets the paint for `brush`, returning `false` for unsupported brushes.
    fn apply_brush(&mut self, brush: &Brush) -> bool {
        match brush {
            Brush::Solid(color) => self.ctx.set_paint(*color),
            Brush::Gradient(gradient) => self.ctx.set_paint(gradient.clone()),
            Brush::Image(_) => return false,
        }
        true
    }
}

/// Clip covering everything within the blur's reach except the outline.
///
/// Meant for the even-odd rule: the outer rectangle and the outline are two
/// subpaths, so the outline interior is excluded.
fn outer_shadow_clip(path: &BezPath, sigma: f32) -> BezPath {
    let reach = f64::from(sigma) * BLUR_EXTENT_SIGMAS;
    let mut clip = path.bounding_box().inflate(reach, reach).to_path(0.1);
    clip.extend(path.iter());
    clip
}

impl CurveSurface for VelloCpuCurveSurface<'_> {
    fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        if !self.apply_brush(brush) {
            tracing::trace!("image brushes are not supported; skipping fill");
            return;
        }
        self.ctx.fill_path(path);
    }

    fn fill_shadow(&mut self, path: &BezPath, shadow: &ShadowPaint) {
        let sigma = shadow.blur_sigma();
        if sigma <= 0.0 {
            tracing::trace!("shadow radius is zero; skipping shadow");
            return;
        }
        // `vello_cpu` scales filter parameters using the layer's transform internally,
        // so the deviation is passed through in user space.
        let filter = Filter::from_primitive(FilterPrimitive::GaussianBlur {
            std_deviation: sigma,
            edge_mode: EdgeMode::None,
        });
        // Outer blur: the shadow must never paint inside the outline.
        let clip = outer_shadow_clip(path, sigma);
        self.ctx.set_fill_rule(Fill::EvenOdd);
        self.ctx.push_clip_layer(&clip);
        self.ctx.set_fill_rule(Fill::NonZero);
        self.ctx.push_layer(None, None, None, None, Some(filter));
        self.ctx.set_paint(shadow.color);
        self.ctx.fill_path(path);
        self.ctx.pop_layer();
        self.ctx.pop_layer();
    }
}

/// Renders `view` into a fresh `width` × `height` pixmap.
///
/// Returns unpremultiplied RGBA8 bytes in row-major order. A view that has
/// not been sized yet produces a fully transparent image.
pub fn render_to_rgba8(view: &CurveView, width: u16, height: u16) -> Vec<u8> {
    let settings = RenderSettings {
        // Keep output on the u8 pipeline so pixels are stable across configurations.
        render_mode: RenderMode::OptimizeSpeed,
        ..RenderSettings::default()
    };
    let mut ctx = RenderContext::new_with(width, height, settings);
    view.render(&mut VelloCpuCurveSurface::new(&mut ctx));
    ctx.flush();

    let mut pixmap = Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    let unpremul = pixmap.take_unpremultiplied();
    let mut bytes = Vec::with_capacity(unpremul.len() * 4);
    for p in unpremul {
        bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    bytes
}
