//! Gravity-style frame-driven easing
//!
//! Models a scalar under constant (or sensor-updated) acceleration with
//! optional friction and bounds. Unlike a tween there is no duration: the
//! value integrates forward every frame until it settles against a bound.
//! The slider knob that rolls under device tilt is the canonical user.

use crate::animation::{sign, FrameAnimation, Handoff, TimestampMs};

/// Configuration for a [`Gravity`] animation.
///
/// All fields beyond `acceleration` are optional refinements. `bounds` with
/// `min > max` is accepted but unvalidated; behavior follows the numeric
/// fall-through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityConfig {
    /// Acceleration applied every frame, in units/s².
    pub acceleration: f32,
    /// Initial velocity when no prior animation hands one over, in units/s.
    pub velocity: f32,
    /// Clamp range `[min, max]` the value settles against.
    pub bounds: Option<[f32; 2]>,
    /// A resting value ignores accelerations smaller than this.
    pub static_friction: Option<f32>,
    /// Deceleration opposing the direction of travel, in units/s².
    pub kinetic_friction: Option<f32>,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            acceleration: 9.81,
            velocity: 0.0,
            bounds: None,
            static_friction: None,
            kinetic_friction: None,
        }
    }
}

impl GravityConfig {
    pub fn new(acceleration: f32) -> Self {
        Self {
            acceleration,
            ..Default::default()
        }
    }

    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.bounds = Some([min, max]);
        self
    }

    pub fn with_static_friction(mut self, friction: f32) -> Self {
        self.static_friction = Some(friction);
        self
    }

    pub fn with_kinetic_friction(mut self, friction: f32) -> Self {
        self.kinetic_friction = Some(friction);
        self
    }
}

/// Frame-driven gravity stepper.
///
/// Owns the per-run state record (`current`, `velocity`, `last_timestamp`,
/// `finished`); the caller owns the instance and is its only mutator.
#[derive(Clone, Debug)]
pub struct Gravity {
    config: GravityConfig,
    current: f32,
    velocity: f32,
    last_timestamp: TimestampMs,
    finished: bool,
}

impl Gravity {
    pub fn new(config: GravityConfig) -> Self {
        Self {
            velocity: config.velocity,
            config,
            current: 0.0,
            last_timestamp: 0.0,
            finished: false,
        }
    }

    pub fn config(&self) -> &GravityConfig {
        &self.config
    }

    /// Update the driving acceleration mid-flight (e.g. from a tilt sensor).
    ///
    /// A finished instance stays finished until restarted; a fresh reading
    /// re-enters via [`FrameAnimation::start`].
    pub fn set_acceleration(&mut self, acceleration: f32) {
        self.config.acceleration = acceleration;
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

impl FrameAnimation for Gravity {
    fn start(&mut self, value: f32, now: TimestampMs, previous: Option<Handoff>) {
        self.current = value;
        match previous {
            Some(prev) => {
                self.velocity = prev.velocity;
                self.last_timestamp = prev.last_timestamp;
            }
            None => {
                self.velocity = self.config.velocity;
                self.last_timestamp = now;
            }
        }
        self.finished = false;
    }

    fn frame(&mut self, now: TimestampMs) -> bool {
        // Timestamps are monotonic per run; a stale frame integrates as a
        // zero-length step rather than rewinding state.
        let delta = (((now - self.last_timestamp) / 1000.0).max(0.0)) as f32;
        let velocity = self.velocity;
        let acceleration = self.config.acceleration;
        let kinetic = self.config.kinetic_friction.unwrap_or(0.0);

        self.current += velocity * delta;
        self.velocity = velocity + (acceleration - sign(velocity) * kinetic) * delta;
        self.last_timestamp = now;

        // An object at rest resists a sub-threshold force. Checked against
        // the pre-step velocity so the acceleration just applied is undone.
        if let Some(static_friction) = self.config.static_friction {
            if velocity == 0.0 && acceleration.abs() < static_friction {
                self.velocity = 0.0;
            }
        }

        if let Some([min, max]) = self.config.bounds {
            if self.current <= min {
                self.current = min;
                // Finished only when motion at the bound points outward;
                // inward velocity keeps the run alive so the value can
                // re-enter the range.
                if self.velocity <= 0.0 {
                    self.velocity = 0.0;
                    self.finished = true;
                    return true;
                }
            } else if self.current >= max {
                self.current = max;
                if self.velocity >= 0.0 {
                    self.velocity = 0.0;
                    self.finished = true;
                    return true;
                }
            }
        }

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
            velocity: self.velocity,
            last_timestamp: self.last_timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive `frames` display refreshes at 60fps, returning the time cursor.
    fn run_frames(gravity: &mut Gravity, start_ms: f64, frames: usize) -> f64 {
        let mut now = start_ms;
        for _ in 0..frames {
            now += 1000.0 / 60.0;
            if gravity.frame(now) {
                break;
            }
        }
        now
    }

    #[test]
    fn no_driving_force_never_finishes() {
        let mut gravity = Gravity::new(
            GravityConfig::new(0.0).with_bounds(0.0, 100.0),
        );
        gravity.start(50.0, 0.0, None);

        for frame in 1..=240 {
            let now = frame as f64 * 1000.0 / 60.0;
            assert!(!gravity.frame(now));
            assert_eq!(gravity.value(), 50.0);
        }
        assert!(!gravity.is_finished());
    }

    #[test]
    fn accelerates_into_the_upper_bound_and_finishes() {
        let mut gravity = Gravity::new(
            GravityConfig::new(500.0).with_bounds(0.0, 100.0),
        );
        gravity.start(0.0, 0.0, None);

        // 500 px/s² covers 100 px well inside two simulated seconds.
        run_frames(&mut gravity, 0.0, 120);

        assert!(gravity.is_finished());
        assert_eq!(gravity.value(), 100.0);
        assert_eq!(gravity.velocity(), 0.0);

        // Further frames leave the settled value alone.
        assert!(gravity.frame(3000.0));
        assert_eq!(gravity.value(), 100.0);
    }

    #[test]
    fn does_not_finish_at_the_start_bound_while_pushed_inward() {
        let mut gravity = Gravity::new(
            GravityConfig::new(300.0).with_bounds(0.0, 100.0),
        );
        gravity.start(0.0, 0.0, None);

        // Sitting on the lower bound but accelerating into the range.
        assert!(!gravity.frame(16.0));
        assert!(!gravity.is_finished());
    }

    #[test]
    fn resting_value_resists_sub_threshold_acceleration() {
        let mut gravity = Gravity::new(
            GravityConfig::new(400.0)
                .with_bounds(0.0, 100.0)
                .with_static_friction(800.0),
        );
        gravity.start(40.0, 0.0, None);

        run_frames(&mut gravity, 0.0, 60);

        assert_eq!(gravity.value(), 40.0);
        assert_eq!(gravity.velocity(), 0.0);
    }

    #[test]
    fn strong_acceleration_overcomes_static_friction() {
        let mut gravity = Gravity::new(
            GravityConfig::new(900.0)
                .with_bounds(0.0, 100.0)
                .with_static_friction(800.0),
        );
        gravity.start(40.0, 0.0, None);

        run_frames(&mut gravity, 0.0, 30);

        assert!(gravity.value() > 40.0);
    }

    #[test]
    fn kinetic_friction_decelerates_travel() {
        let make = |kinetic: Option<f32>| {
            let mut config = GravityConfig::new(200.0);
            if let Some(k) = kinetic {
                config = config.with_kinetic_friction(k);
            }
            let mut g = Gravity::new(config);
            g.start(0.0, 0.0, None);
            run_frames(&mut g, 0.0, 60);
            g
        };

        let free = make(None);
        let dragged = make(Some(150.0));

        assert!(dragged.value() < free.value());
        assert!(dragged.velocity() < free.velocity());
    }

    #[test]
    fn handoff_carries_velocity_into_a_replacement() {
        let mut first = Gravity::new(GravityConfig::new(500.0));
        first.start(0.0, 0.0, None);
        run_frames(&mut first, 0.0, 30);

        let carried = first.handoff();
        assert!(carried.velocity > 0.0);

        let mut second = Gravity::new(GravityConfig::new(-500.0));
        second.start(first.value(), 600.0, Some(carried));

        // Inherited velocity, not the config default of zero.
        assert_eq!(second.velocity(), carried.velocity);
        assert_eq!(second.handoff().last_timestamp, carried.last_timestamp);
    }

    #[test]
    fn stale_timestamp_is_a_zero_length_step() {
        let mut gravity = Gravity::new(GravityConfig::new(500.0));
        gravity.start(10.0, 100.0, None);
        gravity.frame(116.0);

        let value = gravity.value();
        let velocity = gravity.velocity();

        gravity.frame(50.0);
        assert_eq!(gravity.value(), value);
        assert_eq!(gravity.velocity(), velocity);
    }
}
