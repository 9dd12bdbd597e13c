// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Size};
use peniko::{Brush, Gradient};

use crate::config::CurveConfig;
use crate::geometry::CurveGeometry;
use crate::gradient::build_gradient;
use crate::outline::{build_outline_path, is_convex};
use crate::shadow::{ShadowMode, ShadowPaint, decide_shadow_mode};

/// Drawing target for a [`CurveView`].
///
/// Hosts implement this on top of whatever renderer they use. Paths are in
/// view-local coordinates with the origin at the top-left corner.
pub trait CurveSurface {
    /// Fill `path` with `brush` using the non-zero fill rule.
    fn fill_path(&mut self, path: &BezPath, brush: &Brush);

    /// Fill `path` with the shadow tint and blur the result outward.
    fn fill_shadow(&mut self, path: &BezPath, shadow: &ShadowPaint);
}

/// Everything derived from the view size.
#[derive(Clone, Debug)]
struct Derived {
    geometry: CurveGeometry,
    path: BezPath,
    gradient: Gradient,
    convex: bool,
}

/// A curved, gradient-filled backdrop.
///
/// The configuration is fixed at construction. Each call to
/// [`CurveView::on_resize`] recomputes the whole derived state from scratch;
/// until the first resize there is nothing to draw and
/// [`CurveView::render`] does nothing.
#[derive(Clone, Debug)]
pub struct CurveView {
    config: CurveConfig,
    elevation: f64,
    derived: Option<Derived>,
    shadow_mode: ShadowMode,
}

impl CurveView {
    /// Creates a view with the given configuration.
    ///
    /// The configuration is clamped into range first.
    #[must_use]
    pub fn new(config: CurveConfig) -> Self {
        Self {
            config: config.clamped(),
            elevation: 0.0,
            derived: None,
            shadow_mode: ShadowMode::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Returns the host elevation.
    #[must_use]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Sets the host elevation and re-evaluates the shadow mode.
    ///
    /// Geometry does not depend on elevation and is left untouched.
    pub fn set_elevation(&mut self, elevation: f64) {
        self.elevation = elevation;
        self.update_shadow_mode();
    }

    /// Recomputes geometry, outline, gradient, and shadow mode for a new size.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        let size = Size::new(width, height);
        let geometry = CurveGeometry::compute(size, &self.config);
        let path = build_outline_path(width, &geometry.points);
        let gradient = build_gradient(size, geometry.extra_curve_space, &self.config);
        let convex = is_convex(&path);
        self.derived = Some(Derived {
            geometry,
            path,
            gradient,
            convex,
        });
        self.update_shadow_mode();
        tracing::debug!(
            width,
            height,
            extra_curve_space = geometry.extra_curve_space,
            convex,
            shadow = ?self.shadow_mode,
            "curve view resized"
        );
    }

    fn update_shadow_mode(&mut self) {
        self.shadow_mode = match &self.derived {
            Some(derived) => {
                decide_shadow_mode(derived.convex, self.elevation, self.config.shadow_radius)
            }
            None => ShadowMode::default(),
        };
    }

    /// Draws the custom shadow (when active) and then the gradient fill.
    pub fn render(&self, surface: &mut impl CurveSurface) {
        let Some(derived) = &self.derived else {
            tracing::trace!("curve view has no size yet; skipping draw");
            return;
        };
        if self.shadow_mode.use_custom_shadow {
            surface.fill_shadow(&derived.path, &self.shadow_paint());
        }
        surface.fill_path(&derived.path, &Brush::Gradient(derived.gradient.clone()));
    }

    /// Returns the paint used for the custom shadow.
    #[must_use]
    pub fn shadow_paint(&self) -> ShadowPaint {
        ShadowPaint {
            color: self.config.shadow_color,
            radius: self.config.shadow_radius,
        }
    }

    /// Returns the current geometry, if the view has been sized.
    #[must_use]
    pub fn geometry(&self) -> Option<&CurveGeometry> {
        self.derived.as_ref().map(|d| &d.geometry)
    }

    /// Returns the current outline, if the view has been sized.
    #[must_use]
    pub fn path(&self) -> Option<&BezPath> {
        self.derived.as_ref().map(|d| &d.path)
    }

    /// Returns the current fill gradient, if the view has been sized.
    #[must_use]
    pub fn gradient(&self) -> Option<&Gradient> {
        self.derived.as_ref().map(|d| &d.gradient)
    }

    /// Returns whether the current outline is convex.
    #[must_use]
    pub fn is_convex(&self) -> Option<bool> {
        self.derived.as_ref().map(|d| d.convex)
    }

    /// Returns the active shadow mechanisms.
    #[must_use]
    pub fn shadow_mode(&self) -> ShadowMode {
        self.shadow_mode
    }

    /// Returns the outline to hand to the host's elevation shadow.
    ///
    /// This is `Some` for every convex outline, whatever the elevation, and
    /// `None` for non-convex outlines, which the host cannot trace.
    #[must_use]
    pub fn host_outline(&self) -> Option<&BezPath> {
        self.derived
            .as_ref()
            .filter(|d| d.convex)
            .map(|d| &d.path)
    }
}

/// A draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// A [`CurveSurface::fill_path`] call.
    FillPath {
        /// The filled path.
        path: BezPath,
        /// The brush used.
        brush: Brush,
    },
    /// A [`CurveSurface::fill_shadow`] call.
    FillShadow {
        /// The shadow path.
        path: BezPath,
        /// The shadow paint.
        shadow: ShadowPaint,
    },
}

/// A surface that records draw calls instead of producing pixels.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    /// Draw calls in submission order.
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CurveSurface for RecordingSurface {
    fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        self.ops.push(SurfaceOp::FillPath {
            path: path.clone(),
            brush: brush.clone(),
        });
    }

    fn fill_shadow(&mut self, path: &BezPath, shadow: &ShadowPaint) {
        self.ops.push(SurfaceOp::FillShadow {
            path: path.clone(),
            shadow: *shadow,
        });
    }
}
