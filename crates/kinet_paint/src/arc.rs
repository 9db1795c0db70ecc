//! Curved transition paths
//!
//! Builds the cubic path used to move a point between two positions so the
//! motion reads as an arc rather than a straight slide. The curve bulges away
//! from the straight line by at least [`MIN_BOUND_DIST`], with the bulge
//! direction picked from whichever axis dominates the travel.

use crate::path::{Path, PathBuilder, Point};

/// Minimum distance between the bulge anchor and the segment midpoint.
///
/// Keeps the curvature visible even over short or axis-aligned moves.
pub const MIN_BOUND_DIST: f32 = 30.0;

/// Below this squared distance the endpoints are treated as coincident.
const DEGENERATE_DIST2: f32 = 0.5;

/// Below this per-axis delta the move counts as axis-aligned.
const AXIS_EPSILON: f32 = 0.5;

/// Build a cubic arc from `start` to `end`.
///
/// The returned path always begins exactly at `start` and ends exactly at
/// `end`. Coincident endpoints produce a single move command at `end`.
pub fn arc_between(start: Point, end: Point) -> Path {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let dist2 = dx * dx + dy * dy;

    // Guards the divide by the dominant-axis delta below.
    if dist2 < DEGENERATE_DIST2 {
        return PathBuilder::new().move_to(end.x, end.y).build();
    }

    let mid = start.midpoint(end);
    let mut bound = mid;

    // Anchor the bulge on the dominant axis, backing off from `end` against
    // the travel direction. The offset magnitude matches a circular arc
    // through both endpoints.
    if dx.abs() < dy.abs() {
        let y_dist = (dist2 / 2.0 / dy).abs();
        bound.x = end.x;
        bound.y = if end.y < start.y {
            end.y + y_dist
        } else {
            end.y - y_dist
        };
    } else {
        let x_dist = (dist2 / 2.0 / dx).abs();
        bound.x = if end.x < start.x {
            end.x + x_dist
        } else {
            end.x - x_dist
        };
        bound.y = end.y;
    }

    // Axis-aligned moves would leave the anchor on the segment itself, so
    // nudge it sideways, away from the travel direction.
    if dx.abs() < AXIS_EPSILON {
        bound.x += if end.x < start.x {
            MIN_BOUND_DIST
        } else {
            -MIN_BOUND_DIST
        };
    } else if dy.abs() < AXIS_EPSILON {
        bound.y += if end.y < start.y {
            MIN_BOUND_DIST
        } else {
            -MIN_BOUND_DIST
        };
    }

    // Enforce the minimum bulge by pushing the anchor radially out from the
    // midpoint.
    let bound_dist2 = bound.distance_squared(mid);
    if bound_dist2 < MIN_BOUND_DIST * MIN_BOUND_DIST {
        let ratio = MIN_BOUND_DIST / bound_dist2.sqrt();
        bound.x = mid.x + (bound.x - mid.x) * ratio;
        bound.y = mid.y + (bound.y - mid.y) * ratio;
    }

    let c1 = start.midpoint(bound);
    let c2 = end.midpoint(bound);

    PathBuilder::new()
        .move_to(start.x, start.y)
        .cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y)
        .build()
}
