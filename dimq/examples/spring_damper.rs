//! Simulates a mass on a spring with a viscous damper using explicit Euler steps.
//!
//! Every intermediate value is dimensioned, so swapping `k` and `b` or forgetting a `dt` is a compile error.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info); `debug` prints every step.

use std::env;

use anyhow::ensure;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use dimq::{
    Kilograms, Meters, MetersPerSecond, MetersPerSecondSquared, NewtonSecondsPerMeter, Newtons, NewtonsPerMeter,
    Seconds,
};

struct Oscillator {
    mass: Kilograms,
    stiffness: NewtonsPerMeter,
    damping: NewtonSecondsPerMeter,
    position: Meters,
    velocity: MetersPerSecond,
}

impl Oscillator {
    fn force(&self) -> Newtons {
        -(self.stiffness * self.position) - self.damping * self.velocity
    }

    fn step(&mut self, dt: Seconds) {
        let accel: MetersPerSecondSquared = self.force() / self.mass;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let mut osc = Oscillator {
        mass: Kilograms::new(2.0),
        stiffness: NewtonsPerMeter::new(50.0),
        damping: NewtonSecondsPerMeter::new(1.5),
        position: Meters::new(0.2),
        velocity: MetersPerSecond::new(0.0),
    };
    let dt = Seconds::new(0.01);
    let steps = 1_000;

    info!(
        mass = osc.mass.value(),
        stiffness = osc.stiffness.value(),
        damping = osc.damping.value(),
        "Starting simulation"
    );

    let initial = osc.position.abs();
    let mut elapsed = Seconds::default();
    for i in 0..steps {
        osc.step(dt);
        elapsed += dt;
        debug!(
            step = i,
            t = elapsed.value(),
            x = osc.position.value(),
            v = osc.velocity.value(),
            "step"
        );
    }

    info!(
        t = elapsed.value(),
        x = osc.position.value(),
        v = osc.velocity.value(),
        "Simulation finished"
    );
    ensure!(
        osc.position.abs() < initial,
        "damped oscillator gained amplitude: {} m > {} m",
        osc.position.abs(),
        initial
    );

    Ok(())
}
