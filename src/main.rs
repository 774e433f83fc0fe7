/*
 * Boid Flocking Simulation
 *
 * A flock of boids in an 800x800 arena. Every frame each boid moves, re-aims
 * at the flock centroid, steers away from close neighbours, accumulates the
 * heading of its neighbourhood and bounces off the walls; overlapping boids
 * collide elastically.
 *
 * Set RUST_LOG (for example `RUST_LOG=polar_boids=debug`) to see logs.
 */

use anyhow::Result;
use polar_boids::{app, SimulationParams};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    SimulationParams::default().validate()?;
    info!("starting boid simulation");

    nannou::app(app::model).update(app::update).run();
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
