//! Kinet Animation System
//!
//! Frame-driven physics, timed tweens, and arc motion.
//!
//! # Features
//!
//! - **Gravity Physics**: sensor-style acceleration with friction and bounds
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Timed Tweens**: duration-based animations with easing functions
//! - **Arc Motion**: curved point-to-point transitions
//! - **Interruptible**: animations inherit velocity when replaced

pub mod animation;
pub mod arc_motion;
pub mod easing;
pub mod gravity;
pub mod interpolate;
pub mod scheduler;
pub mod spring;
pub mod timing;

pub use animation::{FrameAnimation, Handoff, TimestampMs};
pub use arc_motion::ArcMotion;
pub use easing::Easing;
pub use gravity::{Gravity, GravityConfig};
pub use interpolate::{clamp, interpolate, inv_lerp, lerp, map_range, rad_to_deg, Extrapolation};
pub use scheduler::{AnimationScheduler, DriverId, SpringId};
pub use spring::{Spring, SpringConfig};
pub use timing::{Timing, TimingConfig};
