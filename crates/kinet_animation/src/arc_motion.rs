//! Curved point-to-point motion
//!
//! Animates a 2D point from wherever it starts to a target along the cubic
//! arc from [`kinet_paint::arc_between`], with progress supplied by an owned
//! [`Timing`]. Layout transitions use this so a repositioned element swings
//! into place instead of sliding straight.

use kinet_paint::{arc_between, PathMeasure, Point};

use crate::animation::{FrameAnimation, TimestampMs};
use crate::timing::{Timing, TimingConfig};

/// A point animated along an arc toward a fixed target.
///
/// The start position is only known when the run begins, so the path and its
/// measurement table are built lazily on the first frame and reused for the
/// rest of the run.
pub struct ArcMotion {
    target: Point,
    start: Point,
    position: Point,
    timing: Timing,
    measure: Option<PathMeasure>,
    finished: bool,
}

impl ArcMotion {
    pub fn new(target: Point, config: TimingConfig) -> Self {
        Self {
            target,
            start: target,
            position: target,
            timing: Timing::new(1.0, config),
            measure: None,
            finished: false,
        }
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Begin a run from `from` at timestamp `now`.
    pub fn start(&mut self, from: Point, now: TimestampMs) {
        self.start = from;
        self.position = from;
        self.measure = None;
        self.finished = false;
        self.timing.start(0.0, now, None);
    }

    /// Advance to `now`. Returns `true` once the point has reached the
    /// target and needs no further frames.
    pub fn frame(&mut self, now: TimestampMs) -> bool {
        // Already in place: nothing to travel.
        if self.start == self.target {
            self.position = self.target;
            self.finished = true;
            return true;
        }

        self.finished = self.timing.frame(now);

        let measure = self
            .measure
            .get_or_insert_with(|| PathMeasure::new(&arc_between(self.start, self.target)));

        let progress = self.timing.value();
        self.position = if progress <= 0.0 {
            self.start
        } else if progress < 1.0 {
            measure.point_at(progress)
        } else {
            self.target
        };

        self.finished
    }

    /// Current position along the arc.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
