// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control-point placement and bounds correction for the wave curve.
//!
//! The curve is a single cubic Bezier running along the bottom edge of the
//! view, from `(0, height)` to `(width, height)`. Its two inner control points
//! are placed from the configuration, after which the curve is sampled at a
//! fixed resolution to find how far it dips below the baseline. Every control
//! point is then lifted by that amount so the curve stays inside the view.

use kurbo::{Point, Size};

use crate::config::{CurveConfig, VerticalPlacement};

/// Number of parameter steps used when sampling the curve.
///
/// The curve is evaluated at `t = i / SAMPLE_STEPS` for `i` in
/// `0..=SAMPLE_STEPS`, i.e. 11 samples.
pub const SAMPLE_STEPS: u32 = 10;

/// The four control points of the wave curve, in drawing order.
pub type ControlPoints = [Point; 4];

/// Places the four control points for a view of the given size.
///
/// `P0` and `P3` sit on the baseline at the left and right edges. The inner
/// points take their X from the configured fractions of `width` and their Y
/// from the configured [`VerticalPlacement`].
#[must_use]
pub fn control_points(size: Size, config: &CurveConfig) -> ControlPoints {
    let Size { width, height } = size;
    let (first_y, second_y) = match config.placement {
        VerticalPlacement::Offset {
            first_extra_y,
            second_extra_y,
        } => (height + first_extra_y, height + second_extra_y),
        VerticalPlacement::Proportional { first_y, second_y } => {
            (height * first_y, height * second_y)
        }
    };
    [
        Point::new(0.0, height),
        Point::new(width * config.first_control_point_x, first_y),
        Point::new(width * config.second_control_point_x, second_y),
        Point::new(width, height),
    ]
}

/// Evaluates the cubic at `t` by repeated linear interpolation.
#[must_use]
pub fn de_casteljau(points: &ControlPoints, t: f64) -> Point {
    let [p0, p1, p2, p3] = *points;
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    let c = p2.lerp(p3, t);
    let d = a.lerp(b, t);
    let e = b.lerp(c, t);
    d.lerp(e, t)
}

/// Returns the sampled curve point with the largest Y coordinate.
///
/// Y grows downwards, so this is the point where the curve reaches furthest
/// below its baseline. Sampling is fixed at 11 evenly spaced parameters; the
/// result is not a converged extremum. Ties keep the earliest sample.
#[must_use]
pub fn highest_point(points: &ControlPoints) -> Point {
    let mut best = de_casteljau(points, 0.0);
    for i in 1..=SAMPLE_STEPS {
        let t = f64::from(i) / f64::from(SAMPLE_STEPS);
        let sample = de_casteljau(points, t);
        if sample.y > best.y {
            best = sample;
        }
    }
    best
}

/// How far the sampled curve extends past the baseline `height`.
///
/// The `t = 0` sample is `P0` itself, so for a curve built by
/// [`control_points`] this is never negative.
#[must_use]
pub fn extra_curve_space(points: &ControlPoints, height: f64) -> f64 {
    highest_point(points).y - height
}

/// Moves every control point up by `amount`.
#[must_use]
pub fn shift_up(points: &ControlPoints, amount: f64) -> ControlPoints {
    points.map(|p| Point::new(p.x, p.y - amount))
}

/// Derived curve state for one view size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveGeometry {
    /// The view size the geometry was computed for.
    pub size: Size,
    /// Control points after the bounds correction has been applied.
    pub points: ControlPoints,
    /// Amount every control point was lifted by.
    pub extra_curve_space: f64,
}

impl CurveGeometry {
    /// Computes control points, the bounds correction, and the shifted points.
    #[must_use]
    pub fn compute(size: Size, config: &CurveConfig) -> Self {
        let raw = control_points(size, config);
        let extra = extra_curve_space(&raw, size.height);
        tracing::debug!(?raw, extra_curve_space = extra, "placed curve control points");
        Self {
            size,
            points: shift_up(&raw, extra),
            extra_curve_space: extra,
        }
    }

    /// Height of the baseline after the bounds correction.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.size.height - self.extra_curve_space
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{
        CurveGeometry, control_points, de_casteljau, extra_curve_space, highest_point, shift_up,
    };
    use crate::config::{CurveConfig, VerticalPlacement};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn offset_mode_places_points_relative_to_baseline() {
        let config = CurveConfig::default();
        let pts = control_points(Size::new(1000.0, 500.0), &config);
        assert_eq!(pts[0], Point::new(0.0, 500.0));
        assert_eq!(pts[1], Point::new(400.0, 620.0));
        assert_eq!(pts[2], Point::new(500.0, 320.0));
        assert_eq!(pts[3], Point::new(1000.0, 500.0));
    }

    #[test]
    fn proportional_mode_scales_with_height() {
        let config = CurveConfig::default().with_placement(VerticalPlacement::Proportional {
            first_y: 1.2,
            second_y: 0.8,
        });
        let pts = control_points(Size::new(200.0, 100.0), &config);
        assert!(close(pts[1].x, 80.0));
        assert!(close(pts[1].y, 120.0));
        assert!(close(pts[2].x, 100.0));
        assert!(close(pts[2].y, 80.0));
    }

    #[test]
    fn sampling_hits_endpoints_exactly() {
        let pts = [
            Point::new(0.0, 10.0),
            Point::new(3.0, 40.0),
            Point::new(7.0, -20.0),
            Point::new(10.0, 10.0),
        ];
        assert_eq!(de_casteljau(&pts, 0.0), pts[0]);
        assert_eq!(de_casteljau(&pts, 1.0), pts[3]);
    }

    #[test]
    fn default_curve_dips_by_sampled_amount() {
        let pts = control_points(Size::new(1000.0, 500.0), &CurveConfig::default());
        // The deepest of the 11 samples is at t = 0.2.
        let lowest = highest_point(&pts);
        assert!(close(lowest.y, 528.8), "got {}", lowest.y);
        assert!(close(extra_curve_space(&pts, 500.0), 28.8));
    }

    #[test]
    fn upward_only_curve_needs_no_extra_space() {
        let config = CurveConfig::default().with_placement(VerticalPlacement::Offset {
            first_extra_y: -50.0,
            second_extra_y: -80.0,
        });
        let pts = control_points(Size::new(300.0, 120.0), &config);
        assert!(close(extra_curve_space(&pts, 120.0), 0.0));
    }

    #[test]
    fn shifting_moves_only_y() {
        let pts = control_points(Size::new(100.0, 50.0), &CurveConfig::default());
        let shifted = shift_up(&pts, 7.5);
        for (a, b) in pts.iter().zip(shifted.iter()) {
            assert_eq!(a.x, b.x);
            assert!(close(a.y - 7.5, b.y));
        }
    }

    #[test]
    fn zero_size_is_tolerated() {
        let geometry = CurveGeometry::compute(Size::ZERO, &CurveConfig::default());
        assert!(geometry.extra_curve_space >= 0.0);
        assert!(geometry.points.iter().all(|p| p.x == 0.0));
    }
}
