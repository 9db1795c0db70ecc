//! Animation scheduler
//!
//! Owns all active animations and advances them once per display refresh.
//! The scheduler is the sole mutator of the states it holds: one tick per
//! frame, no reentrancy, no locking.

use crate::animation::{FrameAnimation, TimestampMs};
use crate::spring::Spring;
use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

new_key_type! {
    pub struct SpringId;
    pub struct DriverId;
}

/// A frame-driven animation plus its run bookkeeping.
struct Driver {
    animation: Box<dyn FrameAnimation>,
    start_value: f32,
    started: bool,
    finished: bool,
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
    drivers: SlotMap<DriverId, Driver>,
    epoch: Instant,
    last_tick: Option<TimestampMs>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            drivers: SlotMap::with_key(),
            epoch: Instant::now(),
            last_tick: None,
        }
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Register a frame-driven animation starting from `start_value`.
    ///
    /// The animation's run begins on the next tick.
    pub fn add_driver(
        &mut self,
        animation: Box<dyn FrameAnimation>,
        start_value: f32,
    ) -> DriverId {
        let id = self.drivers.insert(Driver {
            animation,
            start_value,
            started: false,
            finished: false,
        });
        tracing::trace!(?id, start_value, "driver registered");
        id
    }

    /// Swap a running driver for `animation`, handing over its motion state
    /// so velocity stays continuous across the replacement.
    pub fn replace_driver(&mut self, id: DriverId, mut animation: Box<dyn FrameAnimation>) -> bool {
        let Some(driver) = self.drivers.get_mut(id) else {
            return false;
        };

        if driver.started {
            let value = driver.animation.value();
            let handoff = driver.animation.handoff();
            animation.start(value, handoff.last_timestamp, Some(handoff));
        }
        // An unstarted driver keeps its pending start for the next tick.
        driver.animation = animation;
        driver.finished = false;
        true
    }

    pub fn driver_value(&self, id: DriverId) -> Option<f32> {
        self.drivers.get(id).map(|d| d.animation.value())
    }

    pub fn is_driver_finished(&self, id: DriverId) -> Option<bool> {
        self.drivers.get(id).map(|d| d.finished)
    }

    pub fn remove_driver(&mut self, id: DriverId) -> bool {
        self.drivers.remove(id).is_some()
    }

    /// Tick all animations from the wall clock.
    pub fn tick(&mut self) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.tick_at(now_ms);
    }

    /// Tick all animations at an explicit frame timestamp.
    ///
    /// Exposed so hosts with their own display clock (and tests) can drive
    /// the scheduler deterministically.
    pub fn tick_at(&mut self, now_ms: TimestampMs) {
        let dt = match self.last_tick {
            Some(last) => (((now_ms - last) / 1000.0).max(0.0)) as f32,
            None => 0.0,
        };
        self.last_tick = Some(now_ms);

        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }

        for (id, driver) in self.drivers.iter_mut() {
            if driver.finished {
                continue;
            }
            if !driver.started {
                driver.animation.start(driver.start_value, now_ms, None);
                driver.started = true;
            }
            driver.finished = driver.animation.frame(now_ms);
            if driver.finished {
                tracing::trace!(?id, value = driver.animation.value(), "driver settled");
            }
        }
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
            || self.drivers.iter().any(|(_, d)| !d.finished)
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gravity::{Gravity, GravityConfig};
    use crate::spring::SpringConfig;

    #[test]
    fn ticks_springs_and_drivers_together() {
        let mut scheduler = AnimationScheduler::new();

        let spring_id = scheduler.add_spring(Spring::new(SpringConfig::stiff(), 0.0));
        scheduler
            .get_spring_mut(spring_id)
            .unwrap()
            .set_target(50.0);

        let gravity = Gravity::new(GravityConfig::new(500.0).with_bounds(0.0, 100.0));
        let driver_id = scheduler.add_driver(Box::new(gravity), 0.0);

        for frame in 0..=240 {
            scheduler.tick_at(frame as f64 * 1000.0 / 60.0);
        }

        assert_eq!(scheduler.driver_value(driver_id), Some(100.0));
        assert_eq!(scheduler.is_driver_finished(driver_id), Some(true));
        assert!((scheduler.get_spring(spring_id).unwrap().value() - 50.0).abs() < 0.1);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn replacement_inherits_velocity() {
        let mut scheduler = AnimationScheduler::new();
        let driver_id =
            scheduler.add_driver(Box::new(Gravity::new(GravityConfig::new(800.0))), 0.0);

        for frame in 0..30 {
            scheduler.tick_at(frame as f64 * 1000.0 / 60.0);
        }
        let value_before = scheduler.driver_value(driver_id).unwrap();
        assert!(value_before > 0.0);

        // Reverse the force; motion should decelerate, not restart from rest.
        let replaced = scheduler.replace_driver(
            driver_id,
            Box::new(Gravity::new(GravityConfig::new(-800.0))),
        );
        assert!(replaced);

        scheduler.tick_at(30.0 * 1000.0 / 60.0);
        let value_after = scheduler.driver_value(driver_id).unwrap();

        // Still moving forward on inherited velocity.
        assert!(value_after > value_before);
    }

    #[test]
    fn removed_animations_stop_counting_as_active() {
        let mut scheduler = AnimationScheduler::new();
        let driver_id =
            scheduler.add_driver(Box::new(Gravity::new(GravityConfig::new(100.0))), 0.0);

        scheduler.tick_at(0.0);
        assert!(scheduler.has_active_animations());

        assert!(scheduler.remove_driver(driver_id));
        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.driver_count(), 0);
    }

    #[test]
    fn replacing_a_missing_driver_reports_failure() {
        let mut scheduler = AnimationScheduler::new();
        let id = scheduler.add_driver(Box::new(Gravity::new(GravityConfig::default())), 0.0);
        scheduler.remove_driver(id);

        assert!(!scheduler.replace_driver(
            id,
            Box::new(Gravity::new(GravityConfig::default()))
        ));
    }
}
