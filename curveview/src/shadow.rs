// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing between the host's elevation shadow and a custom blurred shadow.
//!
//! Host toolkits usually cast elevation shadows only from convex outlines.
//! A custom shadow is the fallback: the outline filled with a tint and blurred
//! outward, drawn underneath the main fill.

use peniko::Color;

/// Which shadow mechanisms are active for the current outline.
///
/// The two are never active at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShadowMode {
    /// The host should cast its elevation shadow from the outline.
    pub use_host_elevation: bool,
    /// The view should draw its own blurred shadow.
    pub use_custom_shadow: bool,
}

/// Gates a custom-shadow request on the configured radius.
///
/// A radius of zero (or less) always wins over the request.
#[must_use]
pub fn should_draw_custom_shadow(shadow_radius: f64, requested: bool) -> bool {
    shadow_radius > 0.0 && requested
}

/// Picks the shadow mechanism for an outline.
///
/// Convex outlines prefer the host elevation shadow whenever
/// `host_elevation > 0`; the custom shadow is only requested when there is no
/// elevation. Non-convex outlines cannot carry an elevation shadow, so the
/// custom shadow is always requested for them. Every request is then gated by
/// [`should_draw_custom_shadow`].
#[must_use]
pub fn decide_shadow_mode(convex: bool, host_elevation: f64, shadow_radius: f64) -> ShadowMode {
    if convex {
        let use_host_elevation = host_elevation > 0.0;
        ShadowMode {
            use_host_elevation,
            use_custom_shadow: should_draw_custom_shadow(shadow_radius, !use_host_elevation),
        }
    } else {
        ShadowMode {
            use_host_elevation: false,
            use_custom_shadow: should_draw_custom_shadow(shadow_radius, true),
        }
    }
}

/// Paint for the custom shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowPaint {
    /// Shadow tint.
    pub color: Color,
    /// Blur radius in local units.
    pub radius: f64,
}

impl ShadowPaint {
    /// Scale from blur radius to Gaussian standard deviation.
    pub const RADIUS_TO_SIGMA_SCALE: f64 = 0.57735;

    /// Converts the blur radius to a Gaussian standard deviation.
    ///
    /// Uses `radius * 0.57735 + 0.5`, the mapping used by Skia-based
    /// toolkits for mask blurs. Returns `0` for non-positive radii.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "blur filters take f32 deviations; precision loss is invisible"
    )]
    pub fn blur_sigma(&self) -> f32 {
        if self.radius > 0.0 {
            (self.radius * Self::RADIUS_TO_SIGMA_SCALE + 0.5) as f32
        } else {
            0.0
        }
    }
}
