// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=curveview --heading-base-level=0

//! CurveView: a curved, gradient-filled backdrop.
//!
//! The view fills the area between its top edge and a cubic Bezier "wave"
//! running along its bottom edge, using a two-stop linear gradient and an
//! optional blurred shadow. This crate computes everything needed to draw it
//! and leaves the drawing itself to the host:
//! - Control points from configured fractions and offsets ([`geometry`]).
//! - A bounds correction found by sampling the curve, so the wave never
//!   spills past the bottom of the view.
//! - The closed outline path ([`outline`]) and the fill gradient ([`gradient`]).
//! - Whether to draw a custom shadow or rely on the host's elevation
//!   shadow ([`shadow`]).
//!
//! It does **not** own a rendering backend. Hosts implement [`CurveSurface`]
//! for their renderer, call [`CurveView::on_resize`] when the view is laid
//! out, and [`CurveView::render`] when it is drawn.
//!
//! ## Minimal example
//!
//! ```rust
//! use curveview::{CurveConfig, CurveView, RecordingSurface, SurfaceOp};
//! use peniko::color::palette::css;
//!
//! let config = CurveConfig::default().with_shadow(12.0, css::BLACK);
//! let mut view = CurveView::new(config);
//!
//! // Nothing is drawn before the view has a size.
//! let mut surface = RecordingSurface::new();
//! view.render(&mut surface);
//! assert!(surface.ops.is_empty());
//!
//! view.on_resize(1000.0, 500.0);
//! view.render(&mut surface);
//!
//! // The stock wave is not convex, so the custom shadow is drawn first.
//! assert!(matches!(surface.ops[0], SurfaceOp::FillShadow { .. }));
//! assert!(matches!(surface.ops[1], SurfaceOp::FillPath { .. }));
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: `no_std` builds with `libm` float functions.
//! - `serde`: [`attributes::CurveAttributes`], a deserializable attribute bag
//!   resolved into a [`CurveConfig`].
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "serde")]
pub mod attributes;
mod config;
pub mod geometry;
pub mod gradient;
pub mod outline;
pub mod shadow;
mod view;

pub use config::{CurveConfig, VerticalPlacement};
pub use geometry::{ControlPoints, CurveGeometry};
pub use gradient::GradientEndpoints;
pub use shadow::{ShadowMode, ShadowPaint};
pub use view::{CurveSurface, CurveView, RecordingSurface, SurfaceOp};
