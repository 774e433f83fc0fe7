/*
 * Input Module
 *
 * This module handles user input events for the boid simulation.
 *
 * Features:
 * - Boid selection with a left click (debug overlay follows the selection)
 * - Space pauses, R respawns the flock, D toggles the debug overlay
 * - Forwarding raw window events to egui
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent};
use tracing::debug;

use crate::app::{reset_flock, Model};
use crate::renderer::{arena_scale, screen_to_arena};
use crate::MIN_DRAW_RADIUS;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    // Clicks on the UI are not meant for the arena
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let arena = model.simulation.arena();
    let window_rect = app.window_rect();
    let (x, y) = screen_to_arena(model.mouse_position, arena, window_rect);
    if !arena.contains(x, y) {
        model.selected_boid = None;
        return;
    }

    // Small boids are drawn at MIN_DRAW_RADIUS pixels, pick them at that size
    let pick_radius = (MIN_DRAW_RADIUS / arena_scale(arena, window_rect)) as f64;
    model.selected_boid = model.simulation.find_boid_within(x, y, pick_radius);
    debug!(x, y, selected = ?model.selected_boid, "mouse click");
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => {
            model.params.pause_simulation = !model.params.pause_simulation;
            debug!(paused = model.params.pause_simulation, "pause toggled");
        }
        Key::R => {
            debug!("respawn requested");
            reset_flock(model);
        }
        Key::D => model.params.show_debug = !model.params.show_debug,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
