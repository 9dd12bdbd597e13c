// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::palette::css;

/// How the inner control points are placed vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalPlacement {
    /// Pixel offsets added to the baseline height.
    ///
    /// Negative values pull the curve up, positive values push it down, and
    /// zero for both yields a straight edge.
    Offset {
        /// Offset of the first inner control point.
        first_extra_y: f64,
        /// Offset of the second inner control point.
        second_extra_y: f64,
    },
    /// Fractions of the view height, in `[0, 2]`.
    ///
    /// `1.0` sits on the baseline; smaller values bulge upward.
    Proportional {
        /// Fraction for the first inner control point.
        first_y: f64,
        /// Fraction for the second inner control point.
        second_y: f64,
    },
}

impl VerticalPlacement {
    /// Upper bound for proportional fractions.
    pub const MAX_FRACTION: f64 = 2.0;
    /// Stock pixel offsets of the first and second control points.
    pub const DEFAULT_OFFSETS: (f64, f64) = (120.0, -180.0);
    /// Stock height fractions of the first and second control points.
    pub const DEFAULT_FRACTIONS: (f64, f64) = (1.2, 0.8);

    /// Offset placement with the stock offsets of `120` and `-180` pixels.
    #[must_use]
    pub const fn offset_default() -> Self {
        Self::Offset {
            first_extra_y: Self::DEFAULT_OFFSETS.0,
            second_extra_y: Self::DEFAULT_OFFSETS.1,
        }
    }

    /// Proportional placement with the stock fractions `1.2` and `0.8`.
    #[must_use]
    pub const fn proportional_default() -> Self {
        Self::Proportional {
            first_y: Self::DEFAULT_FRACTIONS.0,
            second_y: Self::DEFAULT_FRACTIONS.1,
        }
    }

    /// Returns a copy with proportional fractions clamped into `[0, 2]`.
    ///
    /// Offsets are raw pixel values and are left as they are.
    #[must_use]
    pub fn clamped(self) -> Self {
        match self {
            Self::Offset { .. } => self,
            Self::Proportional { first_y, second_y } => Self::Proportional {
                first_y: clamp_unit(first_y, Self::MAX_FRACTION),
                second_y: clamp_unit(second_y, Self::MAX_FRACTION),
            },
        }
    }
}

impl Default for VerticalPlacement {
    fn default() -> Self {
        Self::offset_default()
    }
}

/// Configuration of a curve view.
///
/// All fractional fields are relative to the view size: `0` is the left/top
/// edge and `1` the right/bottom edge. The `with_*` setters clamp their input,
/// so a configuration assembled through them is always in range. Fields are
/// public for convenience; call [`CurveConfig::clamped`] after assigning them
/// directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveConfig {
    /// Gradient color at the start point.
    pub start_color: Color,
    /// Gradient color at the end point.
    pub end_color: Color,
    /// Horizontal position of the gradient start.
    pub start_color_x: f64,
    /// Vertical position of the gradient start.
    pub start_color_y: f64,
    /// Horizontal position of the gradient end.
    pub end_color_x: f64,
    /// Vertical position of the gradient end, relative to the corrected baseline.
    pub end_color_y: f64,
    /// Horizontal position of the first inner control point.
    pub first_control_point_x: f64,
    /// Horizontal position of the second inner control point.
    pub second_control_point_x: f64,
    /// Vertical placement of both inner control points.
    pub placement: VerticalPlacement,
    /// Blur radius of the custom shadow; `0` disables it.
    pub shadow_radius: f64,
    /// Tint of the custom shadow.
    pub shadow_color: Color,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            start_color: css::CYAN,
            end_color: css::YELLOW,
            start_color_x: 0.1,
            start_color_y: 0.0,
            end_color_x: 0.65,
            end_color_y: 1.0,
            first_control_point_x: 0.4,
            second_control_point_x: 0.5,
            placement: VerticalPlacement::default(),
            shadow_radius: 0.0,
            shadow_color: css::BLACK,
        }
    }
}

impl CurveConfig {
    /// Default configuration using proportional placement.
    #[must_use]
    pub fn proportional() -> Self {
        Self {
            placement: VerticalPlacement::proportional_default(),
            ..Self::default()
        }
    }

    /// Sets both gradient colors.
    #[must_use]
    pub fn with_colors(mut self, start: Color, end: Color) -> Self {
        self.start_color = start;
        self.end_color = end;
        self
    }

    /// Sets the gradient start position as fractions of the view size.
    #[must_use]
    pub fn with_start_position(mut self, x: f64, y: f64) -> Self {
        self.start_color_x = clamp_unit(x, 1.0);
        self.start_color_y = clamp_unit(y, 1.0);
        self
    }

    /// Sets the gradient end position as fractions of the view size.
    #[must_use]
    pub fn with_end_position(mut self, x: f64, y: f64) -> Self {
        self.end_color_x = clamp_unit(x, 1.0);
        self.end_color_y = clamp_unit(y, 1.0);
        self
    }

    /// Sets the horizontal fractions of the two inner control points.
    #[must_use]
    pub fn with_control_point_x(mut self, first: f64, second: f64) -> Self {
        self.first_control_point_x = clamp_unit(first, 1.0);
        self.second_control_point_x = clamp_unit(second, 1.0);
        self
    }

    /// Sets the vertical placement of the inner control points.
    #[must_use]
    pub fn with_placement(mut self, placement: VerticalPlacement) -> Self {
        self.placement = placement.clamped();
        self
    }

    /// Sets the custom shadow radius and tint.
    ///
    /// Negative or NaN radii disable the shadow.
    #[must_use]
    pub fn with_shadow(mut self, radius: f64, color: Color) -> Self {
        self.shadow_radius = clamp_radius(radius);
        self.shadow_color = color;
        self
    }

    /// Returns a copy with every numeric field forced into its valid range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            start_color_x: clamp_unit(self.start_color_x, 1.0),
            start_color_y: clamp_unit(self.start_color_y, 1.0),
            end_color_x: clamp_unit(self.end_color_x, 1.0),
            end_color_y: clamp_unit(self.end_color_y, 1.0),
            first_control_point_x: clamp_unit(self.first_control_point_x, 1.0),
            second_control_point_x: clamp_unit(self.second_control_point_x, 1.0),
            placement: self.placement.clamped(),
            shadow_radius: clamp_radius(self.shadow_radius),
            ..self
        }
    }
}

/// Clamps into `[0, max]`, mapping NaN to `0`.
pub(crate) fn clamp_unit(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

pub(crate) fn clamp_radius(radius: f64) -> f64 {
    if radius > 0.0 { radius } else { 0.0 }
}
