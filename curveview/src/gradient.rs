// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;

use kurbo::{Point, Size};
use peniko::{ColorStop, Extend, Gradient, GradientKind, LinearGradientPosition};

use crate::config::CurveConfig;

/// Start and end coordinates of the fill gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientEndpoints {
    /// Where the start color is fully applied.
    pub start: Point,
    /// Where the end color is fully applied.
    pub end: Point,
}

impl GradientEndpoints {
    /// Scales the configured fractions to the view.
    ///
    /// The end point's Y is taken relative to the corrected baseline
    /// `height - extra_curve_space` rather than the raw height.
    #[must_use]
    pub fn compute(size: Size, extra_curve_space: f64, config: &CurveConfig) -> Self {
        let Size { width, height } = size;
        Self {
            start: Point::new(width * config.start_color_x, height * config.start_color_y),
            end: Point::new(
                width * config.end_color_x,
                (height - extra_curve_space) * config.end_color_y,
            ),
        }
    }
}

/// Builds the two-stop linear gradient used to fill the outline.
///
/// Colors beyond either endpoint are padded with the edge color.
#[must_use]
pub fn build_gradient(size: Size, extra_curve_space: f64, config: &CurveConfig) -> Gradient {
    let GradientEndpoints { start, end } =
        GradientEndpoints::compute(size, extra_curve_space, config);
    let stops = vec![
        ColorStop::from((0.0, config.start_color)),
        ColorStop::from((1.0, config.end_color)),
    ];
    Gradient {
        kind: GradientKind::Linear(LinearGradientPosition::new(start, end)),
        extend: Extend::Pad,
        stops: stops.as_slice().into(),
        ..Gradient::default()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};
    use peniko::{Extend, GradientKind};

    use super::{GradientEndpoints, build_gradient};
    use crate::config::CurveConfig;

    #[test]
    fn endpoints_follow_fractions() {
        let config = CurveConfig::default();
        let ends = GradientEndpoints::compute(Size::new(1000.0, 500.0), 0.0, &config);
        assert!(ends.start.distance_squared(Point::new(100.0, 0.0)) < 1e-12);
        assert!(ends.end.distance_squared(Point::new(650.0, 500.0)) < 1e-12);
    }

    #[test]
    fn end_y_uses_corrected_baseline() {
        let config = CurveConfig::default().with_end_position(0.65, 0.5);
        let ends = GradientEndpoints::compute(Size::new(1000.0, 500.0), 100.0, &config);
        assert_eq!(ends.end.y, 200.0);
        // The start point is not affected by the correction.
        assert_eq!(ends.start.y, 0.0);
    }

    #[test]
    fn gradient_is_linear_and_padded() {
        let gradient = build_gradient(Size::new(10.0, 10.0), 0.0, &CurveConfig::default());
        assert_eq!(gradient.extend, Extend::Pad);
        assert_eq!(gradient.stops.len(), 2);
        match gradient.kind {
            GradientKind::Linear(pos) => {
                assert!(pos.start.distance_squared(Point::new(1.0, 0.0)) < 1e-12);
                assert!(pos.end.distance_squared(Point::new(6.5, 10.0)) < 1e-12);
            }
            other => panic!("expected a linear gradient, got {other:?}"),
        }
    }
}
