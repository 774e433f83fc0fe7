/*
 * Renderer Module
 *
 * This module draws the arena and the flock. Boids are filled circles in
 * their own colour.
 *
 * The simulation works in arena coordinates (origin top-left, y down) while
 * nannou draws with the origin at the window centre and y up, so every
 * position goes through `arena_to_screen`. The arena is scaled uniformly to
 * fit the window.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::physics::Arena;
use crate::{ui, MIN_DRAW_RADIUS};

// Pixels per arena unit when the arena is fitted into the window
pub fn arena_scale(arena: Arena, window_rect: Rect) -> f32 {
    (window_rect.w() / arena.width as f32).min(window_rect.h() / arena.height as f32)
}

pub fn arena_to_screen(x: f64, y: f64, arena: Arena, window_rect: Rect) -> Point2 {
    let scale = arena_scale(arena, window_rect);
    pt2(
        (x - arena.width / 2.0) as f32 * scale + window_rect.x(),
        (arena.height / 2.0 - y) as f32 * scale + window_rect.y(),
    )
}

pub fn screen_to_arena(point: Point2, arena: Arena, window_rect: Rect) -> (f64, f64) {
    let scale = arena_scale(arena, window_rect);
    let x = ((point.x - window_rect.x()) / scale) as f64 + arena.width / 2.0;
    let y = arena.height / 2.0 - ((point.y - window_rect.y()) / scale) as f64;
    (x, y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();
    let arena = model.simulation.arena();
    let scale = arena_scale(arena, window_rect);

    draw.background().color(model.simulation.background());

    for boid in model.simulation.boids() {
        let radius = (boid.size as f32 * scale).max(MIN_DRAW_RADIUS);
        draw.ellipse()
            .xy(arena_to_screen(boid.x, boid.y, arena, window_rect))
            .radius(radius)
            .color(boid.color);
    }

    if model.params.show_debug {
        // Arena outline
        draw.rect()
            .xy(arena_to_screen(arena.width / 2.0, arena.height / 2.0, arena, window_rect))
            .w_h(arena.width as f32 * scale, arena.height as f32 * scale)
            .no_fill()
            .stroke_weight(1.0)
            .stroke(rgba(0.3, 0.3, 0.3, 1.0));

        // Perception radii and heading of the selected boid
        if let Some(boid) = model
            .selected_boid
            .and_then(|index| model.simulation.boids().get(index))
        {
            let center = arena_to_screen(boid.x, boid.y, arena, window_rect);

            draw.ellipse()
                .xy(center)
                .radius(boid.separation as f32 * scale)
                .no_fill()
                .stroke(RED)
                .stroke_weight(1.0);

            draw.ellipse()
                .xy(center)
                .radius(boid.awareness as f32 * scale)
                .no_fill()
                .stroke(GREEN)
                .stroke_weight(1.0);

            let heading_x = boid.x + boid.angle.sin() * boid.speed * 5.0;
            let heading_y = boid.y - boid.angle.cos() * boid.speed * 5.0;
            draw.arrow()
                .start(center)
                .end(arena_to_screen(heading_x, heading_y, arena, window_rect))
                .color(YELLOW)
                .stroke_weight(2.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.simulation.len());
    }

    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
