//! Balloon Slider Demo
//!
//! This example simulates the tilt-driven slider in a terminal:
//! - A knob rolling along a bounded track under gravity with friction
//! - A balloon trailing the knob on a spring
//!
//! The "sensor" sweeps through a tilt cycle; each printed row is one
//! snapshot of the simulated track.
//!
//! Run with: cargo run -p kinet_animation --example balloon_slider_demo

use kinet_animation::{AnimationScheduler, Gravity, GravityConfig, Spring, SpringConfig};

const TRACK_WIDTH: f32 = 60.0;
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut scheduler = AnimationScheduler::new();

    let knob_id = scheduler.add_driver(
        Box::new(Gravity::new(
            GravityConfig::new(0.0)
                .with_bounds(0.0, TRACK_WIDTH)
                .with_static_friction(40.0)
                .with_kinetic_friction(25.0),
        )),
        TRACK_WIDTH / 2.0,
    );
    let balloon_id = scheduler.add_spring(Spring::new(SpringConfig::gentle(), TRACK_WIDTH / 2.0));

    let mut now = 0.0;
    for frame in 0..600u32 {
        now += FRAME_MS;

        // Sweep the tilt: lean right, hold, lean left, settle flat.
        let t = frame as f32 / 600.0;
        let tilt = 90.0 * (t * std::f32::consts::TAU).sin();
        scheduler.replace_driver(
            knob_id,
            Box::new(Gravity::new(
                GravityConfig::new(tilt)
                    .with_bounds(0.0, TRACK_WIDTH)
                    .with_static_friction(40.0)
                    .with_kinetic_friction(25.0),
            )),
        );

        scheduler.tick_at(now);

        let knob = scheduler.driver_value(knob_id).unwrap_or(0.0);
        scheduler
            .get_spring_mut(balloon_id)
            .expect("balloon spring registered above")
            .set_target(knob);

        if frame % 10 == 0 {
            print_track(knob, scheduler.get_spring(balloon_id).map_or(knob, Spring::value));
        }
    }
}

fn print_track(knob: f32, balloon: f32) {
    let mut row = vec![b'-'; TRACK_WIDTH as usize + 1];
    let balloon_at = (balloon.clamp(0.0, TRACK_WIDTH)) as usize;
    let knob_at = (knob.clamp(0.0, TRACK_WIDTH)) as usize;
    row[balloon_at] = b'o';
    row[knob_at] = b'#';
    println!("{}", String::from_utf8_lossy(&row));
}
