/*
 * Physics Module
 *
 * Boundary reflection and pairwise collision response.
 *
 * Boids bounce off the inside of the arena rectangle, shrunk by their own
 * radius. Overlapping pairs exchange momentum along the contact normal
 * (1-D elastic collision expressed with polar vector addition) and are then
 * pushed apart so the same contact does not immediately re-trigger.
 */

use std::f64::consts::{FRAC_PI_2, PI};

use crate::boid::Boid;
use crate::geometry::{add_vectors, distance, PolarVector};

/// The bounded area boids live in. Origin at the top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reflects a boid back inside `[size, width - size] x [size, height - size]`.
    ///
    /// Each axis is checked independently, so a corner reflects both. A boid
    /// sitting exactly on an edge keeps its position and has its heading
    /// reflected.
    pub fn bounce(&self, boid: &mut Boid) {
        let right = self.width - boid.size;
        let bottom = self.height - boid.size;

        if boid.x >= right {
            boid.x = 2.0 * right - boid.x;
            boid.angle = -boid.angle;
        } else if boid.x <= boid.size {
            boid.x = 2.0 * boid.size - boid.x;
            boid.angle = -boid.angle;
        }

        if boid.y >= bottom {
            boid.y = 2.0 * bottom - boid.y;
            boid.angle = PI - boid.angle;
        } else if boid.y <= boid.size {
            boid.y = 2.0 * boid.size - boid.y;
            boid.angle = PI - boid.angle;
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Resolves an overlap between two boids. Returns whether they were touching.
pub fn collide(p1: &mut Boid, p2: &mut Boid) -> bool {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;

    let dist = distance(p1, p2);
    if dist >= p1.size + p2.size {
        return false;
    }

    let total_mass = p1.mass + p2.mass;
    if total_mass <= 0.0 {
        return false;
    }

    let angle = dy.atan2(dx) + FRAC_PI_2;

    let v1 = add_vectors(
        PolarVector::new(p1.angle, p1.speed * (p1.mass - p2.mass) / total_mass),
        PolarVector::new(angle, 2.0 * p2.speed * p2.mass / total_mass),
    );
    let v2 = add_vectors(
        PolarVector::new(p2.angle, p2.speed * (p2.mass - p1.mass) / total_mass),
        PolarVector::new(angle + PI, 2.0 * p1.speed * p1.mass / total_mass),
    );

    p1.angle = v1.angle;
    p1.speed = v1.magnitude;
    p2.angle = v2.angle;
    p2.speed = v2.magnitude;

    // Push apart along the contact normal, one unit past touching
    let overlap = 0.5 * (p1.size + p2.size - dist + 1.0);
    let (nx, ny) = (angle.sin() * overlap, angle.cos() * overlap);
    p1.x += nx;
    p1.y -= ny;
    p2.x -= nx;
    p2.y += ny;

    true
}
