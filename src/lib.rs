/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation.
 * The simulation core (geometry, boid, physics, simulation) has no
 * knowledge of windows or drawing; the remaining modules form the nannou
 * shell that drives it once per frame.
 */

// Re-export key components for easier access
pub use app::Model;
pub use boid::{Boid, Flockmates};
pub use debug::DebugInfo;
pub use error::{ConfigError, ConfigResult};
pub use geometry::{add_vectors, bearing_vector, distance, opposite_bearing_vector, BearingUnit, PolarVector};
pub use params::SimulationParams;
pub use physics::{collide, Arena};
pub use simulation::Simulation;

// Define modules
pub mod app;
pub mod boid;
pub mod debug;
pub mod error;
pub mod geometry;
pub mod input;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod simulation;
pub mod ui;

// Smallest on-screen radius so unit-sized boids stay visible
pub const MIN_DRAW_RADIUS: f32 = 2.0;
