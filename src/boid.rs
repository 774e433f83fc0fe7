/*
 * Boid Module
 *
 * This module defines the Boid struct and its per-tick behaviours.
 * Each boid, in the order the simulation applies them:
 * 1. Moves along its heading
 * 2. Re-aims at the centroid of the whole flock (cohesion)
 * 3. Steers away from boids inside its separation radius (separation)
 * 4. Accumulates the average heading of boids inside its awareness radius (alignment)
 *
 * Behaviours never reach into the simulation. The rest of the roster is lent
 * to them through a read-only `Flockmates` view.
 */

use std::f64::consts::FRAC_PI_2;
use std::iter;

use nannou::color::{rgb, Rgb};
use rand::Rng;

use crate::geometry::{add_vectors, bearing_vector, distance, BearingUnit, PolarVector};

// Seek speed is proportional to the distance from the target
const SEEK_SPEED_FACTOR: f64 = 0.01;
const SPEED_MATCH_DIVISOR: f64 = 8.0;

#[derive(Debug, Clone)]
pub struct Boid {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub angle: f64,
    pub awareness: f64,
    pub separation: f64,
    pub mass: f64,
    pub size: f64,
    pub color: Rgb<u8>,
}

impl Boid {
    pub fn new(x: f64, y: f64, speed: f64, angle: f64, awareness: f64, separation: f64) -> Self {
        let mut rng = rand::thread_rng();

        Self {
            x,
            y,
            speed,
            angle,
            awareness,
            separation,
            mass: 1.0,
            size: 1.0,
            color: rgb(rng.gen(), rng.gen(), rng.gen()),
        }
    }

    pub fn velocity(&self) -> PolarVector {
        PolarVector::new(self.angle, self.speed)
    }

    // Update position based on speed and angle
    pub fn move_forward(&mut self) {
        self.x += self.angle.sin() * self.speed;
        self.y -= self.angle.cos() * self.speed;
    }

    /// Re-aims the boid at `(x, y)` and sets its speed from the distance.
    ///
    /// This overwrites heading and speed outright instead of blending them.
    pub fn seek(&mut self, x: f64, y: f64) {
        let dx = x - self.x;
        let dy = y - self.y;
        self.angle = FRAC_PI_2 + dy.atan2(dx);
        self.speed = dx.hypot(dy) * SEEK_SPEED_FACTOR;
    }

    pub fn regroup(&mut self, centroid: (f64, f64)) {
        let (x, y) = centroid;
        self.seek(x, y);
    }

    pub fn seek_flock_center(&mut self, flock: &Flockmates<'_>) {
        let (x, y) = self.find_centroid(flock);
        self.seek(x, y);
    }

    /// Mean position of the live roster, this boid included.
    pub fn find_centroid(&self, flock: &Flockmates<'_>) -> (f64, f64) {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut count = 0usize;

        for boid in flock.with(self) {
            sum_x += boid.x;
            sum_y += boid.y;
            count += 1;
        }

        (sum_x / count as f64, sum_y / count as f64)
    }

    /// Steers away from every other boid closer than the separation radius.
    ///
    /// Each qualifying neighbour adds a unit bearing onto the running
    /// (angle, speed) vector, so corrections stack without limit.
    pub fn avoid(&mut self, flock: &Flockmates<'_>, unit: BearingUnit) {
        let mut vector = self.velocity();
        let mut corrected = false;

        for other in flock.others() {
            if distance(self, other) < self.separation {
                vector = add_vectors(vector, bearing_vector(other, self, unit));
                corrected = true;
            }
        }

        if corrected {
            self.angle = vector.angle;
            self.speed = vector.magnitude;
        }
    }

    /// Boids of the live roster within the awareness radius.
    ///
    /// The distance to itself is zero, so a boid is its own neighbour whenever
    /// its awareness is positive.
    pub fn neighbors<'b>(&'b self, flock: &'b Flockmates<'_>) -> Vec<&'b Boid> {
        flock
            .with(self)
            .filter(|other| distance(self, other) < self.awareness)
            .collect()
    }

    pub fn find_centroid_angle<'b>(boids: impl IntoIterator<Item = &'b Boid>) -> Option<f64> {
        let (total, count) = boids
            .into_iter()
            .fold((0.0, 0usize), |(total, count), boid| (total + boid.angle, count + 1));

        if count == 0 {
            None
        } else {
            Some(total / count as f64)
        }
    }

    /// Adds the average of the neighbourhood heading and the own heading onto
    /// the own heading. Headings accumulate and are never wrapped.
    pub fn realign(&mut self, flock: &Flockmates<'_>) {
        let Some(neighbor_angle) = Self::find_centroid_angle(self.neighbors(flock)) else {
            return;
        };

        let average = (neighbor_angle + self.angle) / 2.0;
        self.angle += average;
    }

    // Nudge speed by an eighth of the flock's mean speed
    pub fn match_speed(&mut self, flock: &Flockmates<'_>) {
        let (total, count) = flock
            .with(self)
            .fold((0.0, 0usize), |(total, count), boid| (total + boid.speed, count + 1));

        self.speed += total / count as f64 / SPEED_MATCH_DIVISOR;
    }
}

/// Read-only view of the roster around the boid currently being updated.
///
/// `before` holds the boids earlier in roster order (already updated this
/// tick), `after` the later ones (not updated yet). The acting boid itself is
/// borrowed mutably by the caller and is not part of the view.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flockmates<'a> {
    before: &'a [Boid],
    after: &'a [Boid],
}

impl<'a> Flockmates<'a> {
    pub fn new(before: &'a [Boid], after: &'a [Boid]) -> Self {
        Self { before, after }
    }

    // No other boids at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Splits the roster into the boid at `index` and a view of everyone else.
    pub fn split(boids: &'a mut [Boid], index: usize) -> Option<(&'a mut Boid, Self)> {
        if index >= boids.len() {
            return None;
        }

        let (before, rest) = boids.split_at_mut(index);
        let (current, after) = rest.split_first_mut()?;
        Some((current, Self { before, after }))
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every other boid in roster order.
    pub fn others(&self) -> impl Iterator<Item = &'a Boid> + 'a {
        let (before, after) = (self.before, self.after);
        before.iter().chain(after.iter())
    }

    /// The full roster in order, with `current` in its own slot.
    pub fn with<'b>(&'b self, current: &'b Boid) -> impl Iterator<Item = &'b Boid> + 'b {
        let before: &'b [Boid] = self.before;
        let after: &'b [Boid] = self.after;
        before.iter().chain(iter::once(current)).chain(after.iter())
    }
}
