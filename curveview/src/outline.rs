// Copyright 2026 the CurveView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed outline filled by the view.

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point, Vec2};

use crate::geometry::ControlPoints;

/// Builds the filled outline from corrected control points.
///
/// The path starts at the top-right corner, runs to the top-left corner,
/// drops to `P0`, follows the cubic through `P1`, `P2` to `P3`, and returns
/// to the top-right corner. It always contains one move followed by exactly
/// four segments (line, line, cubic, line) and no explicit close.
#[must_use]
pub fn build_outline_path(width: f64, points: &ControlPoints) -> BezPath {
    let [p0, p1, p2, p3] = *points;
    let mut path = BezPath::new();
    path.move_to((width, 0.0));
    path.line_to((0.0, 0.0));
    path.line_to(p0);
    path.curve_to(p1, p2, p3);
    path.line_to((width, 0.0));
    path
}

/// Returns whether the outline can be traced by a convex-only shadow caster.
///
/// Every point of the path, including cubic control points, is treated as a
/// polygon vertex. The polygon is convex when all non-degenerate turns go the
/// same way and its edge directions change sign at most twice along each
/// axis. Outlines with no turns at all (zero area) are reported as convex.
#[must_use]
pub fn is_convex(path: &BezPath) -> bool {
    let mut vertices: Vec<Point> = Vec::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => vertices.push(p),
            PathEl::QuadTo(c, p) => vertices.extend([c, p]),
            PathEl::CurveTo(c1, c2, p) => vertices.extend([c1, c2, p]),
            PathEl::ClosePath => {}
        }
    }
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    let edges: Vec<Vec2> = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| *b - *a)
        .filter(|d| d.x != 0.0 || d.y != 0.0)
        .collect();
    if edges.len() < 3 {
        return true;
    }

    let mut winding = 0.0_f64;
    for (a, b) in edges.iter().zip(edges.iter().cycle().skip(1)) {
        let cross = a.cross(*b);
        if cross == 0.0 {
            continue;
        }
        if winding == 0.0 {
            winding = cross;
        } else if (winding > 0.0) != (cross > 0.0) {
            return false;
        }
    }

    sign_changes(edges.iter().map(|d| d.x)) <= 2 && sign_changes(edges.iter().map(|d| d.y)) <= 2
}

/// Counts cyclic sign flips in a sequence, ignoring zeros.
fn sign_changes(values: impl Iterator<Item = f64>) -> usize {
    let signs: Vec<bool> = values.filter(|v| *v != 0.0).map(|v| v > 0.0).collect();
    signs
        .iter()
        .zip(signs.iter().cycle().skip(1))
        .filter(|(a, b)| a != b)
        .count()
}
