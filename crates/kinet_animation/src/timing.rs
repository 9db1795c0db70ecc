//! Duration-based tween driven by frame timestamps
//!
//! The workhorse driver for progress values: eases from the start value to a
//! target over a fixed duration, advanced by the same per-frame clock as the
//! physics steppers.

use crate::animation::{FrameAnimation, Handoff, TimestampMs};
use crate::easing::Easing;

/// Configuration for a [`Timing`] animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingConfig {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            easing: Easing::QuadInOut,
        }
    }
}

impl TimingConfig {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            ..Default::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Tween toward a target value over a fixed duration.
#[derive(Clone, Debug)]
pub struct Timing {
    to: f32,
    config: TimingConfig,
    from: f32,
    current: f32,
    start_time: TimestampMs,
    last_timestamp: TimestampMs,
    finished: bool,
}

impl Timing {
    pub fn new(to: f32, config: TimingConfig) -> Self {
        Self {
            to,
            config,
            from: 0.0,
            current: 0.0,
            start_time: 0.0,
            last_timestamp: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

impl FrameAnimation for Timing {
    fn start(&mut self, value: f32, now: TimestampMs, previous: Option<Handoff>) {
        self.from = value;
        self.current = value;
        self.start_time = now;
        // Duration-based: a predecessor's velocity does not bend the curve,
        // but its clock keeps elapsed time continuous.
        self.last_timestamp = previous.map_or(now, |prev| prev.last_timestamp);
        self.finished = false;
    }

    fn frame(&mut self, now: TimestampMs) -> bool {
        self.last_timestamp = now;
        let elapsed = now - self.start_time;

        if elapsed >= self.config.duration_ms {
            self.current = self.to;
            self.finished = true;
            return true;
        }

        let t = ((elapsed / self.config.duration_ms).max(0.0)) as f32;
        self.current = self.from + (self.to - self.from) * self.config.easing.apply(t);
        false
    }

    fn value(&self) -> f32 {
        self.current
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn handoff(&self) -> Handoff {
        Handoff {
            velocity: 0.0,
            last_timestamp: self.last_timestamp,
        }
    }
}
