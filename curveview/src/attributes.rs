// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute bags from host styling data.
//!
//! [`CurveAttributes`] mirrors the attribute names a layout file would use
//! (`startColor`, `firstControlPointExtraY`, `curveShadowRadius`, ...). Every
//! attribute is optional; [`CurveAttributes::resolve`] fills in the stock
//! defaults and clamps values into range, the same way a styled-attribute
//! reader would.
//!
//! ```rust
//! use curveview::VerticalPlacement;
//! use curveview::attributes::CurveAttributes;
//!
//! let attrs = CurveAttributes {
//!     start_color: Some("#ffa78b".into()),
//!     first_control_point_y: Some(1.4),
//!     ..CurveAttributes::default()
//! };
//! let config = attrs.resolve().unwrap();
//! assert_eq!(
//!     config.placement,
//!     VerticalPlacement::Proportional { first_y: 1.4, second_y: 0.8 }
//! );
//! ```

use alloc::string::String;

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;

use crate::config::{CurveConfig, VerticalPlacement};

/// Errors produced while resolving attributes.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AttributeError {
    /// A color attribute could not be parsed as a CSS color.
    #[error("invalid color `{value}` for attribute `{name}`")]
    InvalidColor {
        /// Attribute name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
    /// Both offset and proportional control-point attributes were supplied.
    #[error("control points use both pixel offsets and height fractions")]
    MixedPlacement,
}

/// Optional curve attributes, named as in host layout files.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CurveAttributes {
    /// `startColor`: CSS color string.
    pub start_color: Option<String>,
    /// `endColor`: CSS color string.
    pub end_color: Option<String>,
    /// `startColorX`: fraction of the width.
    pub start_color_x: Option<f64>,
    /// `startColorY`: fraction of the height.
    pub start_color_y: Option<f64>,
    /// `endColorX`: fraction of the width.
    pub end_color_x: Option<f64>,
    /// `endColorY`: fraction of the corrected height.
    pub end_color_y: Option<f64>,
    /// `firstControlPointX`: fraction of the width.
    pub first_control_point_x: Option<f64>,
    /// `secondControlPointX`: fraction of the width.
    pub second_control_point_x: Option<f64>,
    /// `firstControlPointExtraY`: pixels below the baseline.
    pub first_control_point_extra_y: Option<f64>,
    /// `secondControlPointExtraY`: pixels below the baseline.
    pub second_control_point_extra_y: Option<f64>,
    /// `firstControlPointY`: fraction of the height.
    pub first_control_point_y: Option<f64>,
    /// `secondControlPointY`: fraction of the height.
    pub second_control_point_y: Option<f64>,
    /// `curveShadowRadius`: blur radius in pixels.
    pub curve_shadow_radius: Option<f64>,
    /// `curveShadowColor`: CSS color string.
    pub curve_shadow_color: Option<String>,
}

impl CurveAttributes {
    /// Resolves the attributes into a clamped configuration.
    ///
    /// Proportional placement is chosen when only the `*ControlPointY`
    /// attributes are present; otherwise offset placement is used.
    pub fn resolve(&self) -> Result<CurveConfig, AttributeError> {
        let defaults = CurveConfig::default();
        let has_offset = self.first_control_point_extra_y.is_some()
            || self.second_control_point_extra_y.is_some();
        let has_fraction =
            self.first_control_point_y.is_some() || self.second_control_point_y.is_some();

        let placement = match (has_offset, has_fraction) {
            (true, true) => return Err(AttributeError::MixedPlacement),
            (false, true) => {
                let (first_y, second_y) = VerticalPlacement::DEFAULT_FRACTIONS;
                VerticalPlacement::Proportional {
                    first_y: self.first_control_point_y.unwrap_or(first_y),
                    second_y: self.second_control_point_y.unwrap_or(second_y),
                }
            }
            _ => {
                let (first_extra_y, second_extra_y) = VerticalPlacement::DEFAULT_OFFSETS;
                VerticalPlacement::Offset {
                    first_extra_y: self.first_control_point_extra_y.unwrap_or(first_extra_y),
                    second_extra_y: self.second_control_point_extra_y.unwrap_or(second_extra_y),
                }
            }
        };

        let config = CurveConfig {
            start_color: color_attr(
                "startColor",
                self.start_color.as_deref(),
                defaults.start_color,
            )?,
            end_color: color_attr("endColor", self.end_color.as_deref(), defaults.end_color)?,
            start_color_x: self.start_color_x.unwrap_or(defaults.start_color_x),
            start_color_y: self.start_color_y.unwrap_or(defaults.start_color_y),
            end_color_x: self.end_color_x.unwrap_or(defaults.end_color_x),
            end_color_y: self.end_color_y.unwrap_or(defaults.end_color_y),
            first_control_point_x: self
                .first_control_point_x
                .unwrap_or(defaults.first_control_point_x),
            second_control_point_x: self
                .second_control_point_x
                .unwrap_or(defaults.second_control_point_x),
            placement,
            shadow_radius: self.curve_shadow_radius.unwrap_or(defaults.shadow_radius),
            shadow_color: color_attr(
                "curveShadowColor",
                self.curve_shadow_color.as_deref(),
                defaults.shadow_color,
            )?,
        };
        Ok(config.clamped())
    }
}

fn color_attr(
    name: &'static str,
    value: Option<&str>,
    fallback: Color,
) -> Result<Color, AttributeError> {
    let Some(value) = value else {
        return Ok(fallback);
    };
    parse_color(value)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| AttributeError::InvalidColor {
            name,
            value: value.into(),
        })
}
