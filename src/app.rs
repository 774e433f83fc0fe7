/*
 * Application Module
 *
 * This module defines the main application model for the boid simulation.
 * It creates the window and the flock, runs the UI, and advances the
 * simulation exactly once per frame unless paused.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::Rng;
use tracing::{debug, error, info, warn};

use crate::debug::DebugInfo;
use crate::error::ConfigResult;
use crate::params::SimulationParams;
use crate::simulation::Simulation;
use crate::{input, renderer, ui};

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
    pub selected_boid: Option<usize>,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();

    // The window is exactly the arena
    let window_id = app
        .new_window()
        .title("Boids")
        .size(params.arena_width as u32, params.arena_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let simulation = spawn_flock(&params, &mut rand::thread_rng()).unwrap_or_else(|err| {
        error!(%err, "default parameters rejected, starting with an empty arena");
        Simulation::new(params.arena_width, params.arena_height)
    });

    Model {
        simulation,
        params,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
        selected_boid: None,
    }
}

/// Builds a simulation and fills it with `num_boids` randomly placed boids.
///
/// Positions and headings are whole numbers: x and y in `0..=spawn_extent`,
/// angle in `0..=max_initial_angle` (taken as radians).
pub fn spawn_flock<R: Rng>(params: &SimulationParams, rng: &mut R) -> ConfigResult<Simulation> {
    let mut simulation = Simulation::from_params(params)?;
    let extent = params.spawn_extent as u32;

    for _ in 0..params.num_boids {
        let x = rng.gen_range(0..=extent) as f64;
        let y = rng.gen_range(0..=extent) as f64;
        let angle = rng.gen_range(0..=params.max_initial_angle) as f64;

        let boid = simulation.add_boid(
            x,
            y,
            params.initial_speed,
            angle,
            params.awareness,
            params.separation,
        );
        boid.mass = params.boid_mass;
        boid.size = params.boid_size;
    }

    info!(
        boids = params.num_boids,
        width = params.arena_width,
        height = params.arena_height,
        "spawned flock"
    );
    Ok(simulation)
}

// Replace the flock, keeping the current one if the parameters are unusable
pub fn reset_flock(model: &mut Model) {
    match spawn_flock(&model.params, &mut rand::thread_rng()) {
        Ok(simulation) => {
            model.simulation = simulation;
            model.selected_boid = None;
        }
        Err(err) => warn!(%err, "keeping current flock"),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (should_reset_boids, num_boids_changed, ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if ui_changed {
        debug!(
            bearing_unit = ?model.params.bearing_unit,
            speed_matching = model.params.enable_speed_matching,
            paused = model.params.pause_simulation,
            "parameters changed"
        );
        model.simulation.set_bearing_unit(model.params.bearing_unit);
        model.simulation.set_speed_matching(model.params.enable_speed_matching);
    }

    if should_reset_boids || num_boids_changed {
        reset_flock(model);
    }

    if !model.params.pause_simulation {
        model.simulation.step();
    }

    model.debug_info.ticks = model.simulation.ticks();
    model.debug_info.collisions = model.simulation.last_tick_collisions();
    model.debug_info.selected_boid = model.selected_boid;
}
