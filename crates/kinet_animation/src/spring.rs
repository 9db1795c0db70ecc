//! Spring physics
//!
//! Damped harmonic springs integrated with RK4, used for values that chase a
//! moving target (the balloon trailing a slider knob). Retargeting keeps the
//! current velocity, so an interrupted spring bends toward the new target
//! instead of snapping.

/// Spring tuning parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Restoring force per unit of displacement.
    pub stiffness: f32,
    /// Velocity-proportional damping force.
    pub damping: f32,
    /// Mass of the animated value.
    pub mass: f32,
    /// Velocity the spring starts with.
    pub initial_velocity: f32,
    /// Displacement and velocity magnitudes below which the spring settles.
    pub rest_threshold: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
            mass: 1.0,
            initial_velocity: 0.0,
            rest_threshold: 0.01,
        }
    }
}

impl SpringConfig {
    /// Soft spring with a relaxed approach
    pub fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            ..Default::default()
        }
    }

    /// Fast spring with little overshoot
    pub fn stiff() -> Self {
        Self {
            stiffness: 210.0,
            damping: 20.0,
            ..Default::default()
        }
    }

    /// Bouncy spring with visible oscillation
    pub fn wobbly() -> Self {
        Self {
            stiffness: 180.0,
            damping: 12.0,
            ..Default::default()
        }
    }

    pub fn with_initial_velocity(mut self, velocity: f32) -> Self {
        self.initial_velocity = velocity;
        self
    }
}

/// A damped spring animating one scalar toward a target.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    /// Create a spring at rest at `value`, targeting `value`.
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            velocity: config.initial_velocity,
            config,
            value,
            target: value,
            settled: config.initial_velocity == 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring, keeping the current velocity.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.settled = false;
    }

    /// Snap straight to `value` and stop.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.settled = true;
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    fn acceleration(&self, value: f32, velocity: f32) -> f32 {
        (-self.config.stiffness * (value - self.target) - self.config.damping * velocity)
            / self.config.mass
    }

    /// Advance the spring by `dt` seconds using one RK4 step.
    pub fn step(&mut self, dt: f32) {
        if self.settled || dt <= 0.0 {
            return;
        }

        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);
        let k2x = v + k1v * dt / 2.0;
        let k2v = self.acceleration(x + k1x * dt / 2.0, v + k1v * dt / 2.0);
        let k3x = v + k2v * dt / 2.0;
        let k3v = self.acceleration(x + k2x * dt / 2.0, v + k2v * dt / 2.0);
        let k4x = v + k3v * dt;
        let k4v = self.acceleration(x + k3x * dt, v + k3v * dt);

        self.value = x + dt / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + dt / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);

        let rest = self.config.rest_threshold;
        if (self.value - self.target).abs() < rest && self.velocity.abs() < rest {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}
