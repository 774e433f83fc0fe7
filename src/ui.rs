/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::geometry::BearingUnit;
use crate::params::SimulationParams;

// Update the UI and return whether boids should be reset, number of boids changed, and if any UI changes occurred
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset_boids = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();
    let spawn_extent_range = params.get_spawn_extent_range();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));

                if ui.button("Reset Boids").clicked() {
                    should_reset_boids = true;
                }

                ui.add(egui::Slider::new(&mut params.spawn_extent, spawn_extent_range).text("Spawn Extent"));
                ui.add(egui::Slider::new(&mut params.initial_speed, SimulationParams::get_speed_range()).text("Initial Speed"));
                ui.add(egui::Slider::new(&mut params.max_initial_angle, SimulationParams::get_angle_range()).text("Max Initial Angle"));
                ui.add(egui::Slider::new(&mut params.boid_mass, SimulationParams::get_mass_range()).text("Mass"));
                ui.add(egui::Slider::new(&mut params.boid_size, SimulationParams::get_size_range()).text("Size"));
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.awareness, SimulationParams::get_radius_range()).text("Awareness Radius"));
                ui.add(egui::Slider::new(&mut params.separation, SimulationParams::get_radius_range()).text("Separation Radius"));
                ui.checkbox(&mut params.enable_speed_matching, "Match Flock Speed");

                ui.label("Avoidance Bearing");
                for unit in [BearingUnit::Degrees, BearingUnit::Radians] {
                    ui.radio_value(&mut params.bearing_unit, unit, unit.label());
                }
            });

            ui.collapsing("Statistics", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Ticks: {}", debug_info.ticks));
                ui.label(format!("Collisions last tick: {}", debug_info.collisions));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (spawn_changed, num_boids_changed, ui_changed) = params.detect_changes();

    (should_reset_boids || spawn_changed, num_boids_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boids_len: usize,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;

    let selected = match debug_info.selected_boid {
        Some(index) => format!("Selected: #{}", index),
        None => "Selected: none".to_string(),
    };
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Boids: {}", boids_len),
        format!("Tick: {}", debug_info.ticks),
        format!("Collisions: {}", debug_info.collisions),
        selected,
    ];

    // Background panel in the bottom-left corner, clear of the egui window
    let panel_height = line_height * debug_texts.len() as f32 + margin;
    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.bottom() + panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Fixed offset so the text reads left-aligned
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
