//! Arc-length measurement and sampling of paths
//!
//! Flattens a path once into a cumulative-length polyline so the point at a
//! fractional progress can be fetched cheaply every display frame.

use crate::path::{Path, PathCommand, Point};

/// Line segments each curve command is flattened into.
///
/// Enough that the sampled point stays well under a device pixel off the
/// true curve at typical UI travel distances.
const CURVE_STEPS: usize = 32;

/// Precomputed arc-length table over a flattened path.
pub struct PathMeasure {
    points: Vec<Point>,
    lengths: Vec<f32>,
    total: f32,
}

impl PathMeasure {
    /// Flatten `path` and accumulate segment lengths.
    ///
    /// Move commands start a new pen position without contributing length,
    /// matching how a renderer treats disjoint contours.
    pub fn new(path: &Path) -> Self {
        let mut points: Vec<Point> = Vec::new();
        let mut lengths: Vec<f32> = Vec::new();
        let mut total = 0.0f32;
        let mut pen = Point::ZERO;
        let mut contour_start = Point::ZERO;

        for command in path.commands() {
            match *command {
                PathCommand::MoveTo(p) => {
                    push_vertex(&mut points, &mut lengths, &mut total, p, true);
                    pen = p;
                    contour_start = p;
                }
                PathCommand::LineTo(p) => {
                    push_vertex(&mut points, &mut lengths, &mut total, p, false);
                    pen = p;
                }
                PathCommand::QuadTo { control, end } => {
                    // Interior samples only; the endpoint is pushed exactly.
                    for i in 1..CURVE_STEPS {
                        let t = i as f32 / CURVE_STEPS as f32;
                        let p = quad_at(pen, control, end, t);
                        push_vertex(&mut points, &mut lengths, &mut total, p, false);
                    }
                    push_vertex(&mut points, &mut lengths, &mut total, end, false);
                    pen = end;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    for i in 1..CURVE_STEPS {
                        let t = i as f32 / CURVE_STEPS as f32;
                        let p = cubic_at(pen, control1, control2, end, t);
                        push_vertex(&mut points, &mut lengths, &mut total, p, false);
                    }
                    push_vertex(&mut points, &mut lengths, &mut total, end, false);
                    pen = end;
                }
                PathCommand::Close => {
                    push_vertex(&mut points, &mut lengths, &mut total, contour_start, false);
                    pen = contour_start;
                }
            }
        }

        Self {
            points,
            lengths,
            total,
        }
    }

    /// Total flattened length of the path.
    pub fn length(&self) -> f32 {
        self.total
    }

    /// Point at normalized progress `t` along the path, clamped to [0, 1].
    ///
    /// A zero-length path (empty or a lone move) pins every `t` to its final
    /// pen position; an entirely empty path samples to the origin.
    pub fn point_at(&self, t: f32) -> Point {
        let Some(&last) = self.points.last() else {
            return Point::ZERO;
        };
        if self.total <= 0.0 || t >= 1.0 {
            return last;
        }
        if t <= 0.0 {
            return self.points[0];
        }

        let target = t * self.total;

        // First vertex at or past the target distance; partition_point keeps
        // this O(log n) over the flattened table.
        let idx = self.lengths.partition_point(|&len| len < target);
        if idx == 0 {
            return self.points[0];
        }

        let prev = self.lengths[idx - 1];
        let span = self.lengths[idx] - prev;
        if span <= 0.0 {
            return self.points[idx];
        }

        let local = (target - prev) / span;
        self.points[idx - 1].lerp(self.points[idx], local)
    }
}

/// Append a flattened vertex, accumulating distance unless it is a pen jump.
fn push_vertex(
    points: &mut Vec<Point>,
    lengths: &mut Vec<f32>,
    total: &mut f32,
    p: Point,
    jump: bool,
) {
    if let Some(&last) = points.last() {
        if !jump {
            *total += last.distance(p);
        }
    }
    points.push(p);
    lengths.push(*total);
}

fn quad_at(p0: Point, c: Point, p1: Point, t: f32) -> Point {
    let a = p0.lerp(c, t);
    let b = c.lerp(p1, t);
    a.lerp(b, t)
}

fn cubic_at(p0: Point, c1: Point, c2: Point, p1: Point, t: f32) -> Point {
    let a = p0.lerp(c1, t);
    let b = c1.lerp(c2, t);
    let c = c2.lerp(p1, t);
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    ab.lerp(bc, t)
}
