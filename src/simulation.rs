/*
 * Simulation Module
 *
 * Owns the arena and the roster of boids and advances them one tick at a time.
 *
 * A tick is strictly sequential. For each boid in roster order:
 *   move -> seek flock centre -> avoid -> realign -> bounce
 * and then collide it against every later boid. Boid i therefore sees the
 * already-updated state of boids 0..i and the previous state of i+1..n.
 */

use nannou::color::{rgb, Rgb};
use tracing::trace;

use crate::boid::{Boid, Flockmates};
use crate::error::ConfigError;
use crate::geometry::{distance, BearingUnit};
use crate::params::SimulationParams;
use crate::physics::{collide, Arena};

pub struct Simulation {
    arena: Arena,
    boids: Vec<Boid>,
    background: Rgb<u8>,
    bearing_unit: BearingUnit,
    speed_matching: bool,
    ticks: u64,
    last_tick_collisions: usize,
}

impl Simulation {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            arena: Arena::new(width, height),
            boids: Vec::new(),
            background: rgb(0, 0, 0),
            bearing_unit: BearingUnit::default(),
            speed_matching: false,
            ticks: 0,
            last_tick_collisions: 0,
        }
    }

    /// Builds an empty simulation configured from validated parameters.
    pub fn from_params(params: &SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut simulation = Self::new(params.arena_width, params.arena_height);
        simulation.bearing_unit = params.bearing_unit;
        simulation.speed_matching = params.enable_speed_matching;
        simulation.boids.reserve(params.num_boids);
        Ok(simulation)
    }

    /// Appends a boid with unit mass and size. Returns it so callers can
    /// adjust its body.
    pub fn add_boid(
        &mut self,
        x: f64,
        y: f64,
        speed: f64,
        angle: f64,
        awareness: f64,
        separation: f64,
    ) -> &mut Boid {
        let index = self.boids.len();
        self.boids.push(Boid::new(x, y, speed, angle, awareness, separation));
        &mut self.boids[index]
    }

    /// Advances every boid by one tick.
    pub fn step(&mut self) {
        let arena = self.arena;
        let unit = self.bearing_unit;
        let mut collisions = 0;

        for i in 0..self.boids.len() {
            let Some((boid, flock)) = Flockmates::split(&mut self.boids, i) else {
                break;
            };

            boid.move_forward();
            boid.seek_flock_center(&flock);
            boid.avoid(&flock, unit);
            boid.realign(&flock);
            if self.speed_matching {
                boid.match_speed(&flock);
            }
            arena.bounce(boid);

            for j in (i + 1)..self.boids.len() {
                let (head, tail) = self.boids.split_at_mut(j);
                if collide(&mut head[i], &mut tail[0]) {
                    collisions += 1;
                }
            }
        }

        self.ticks += 1;
        self.last_tick_collisions = collisions;
        trace!(tick = self.ticks, boids = self.boids.len(), collisions, "simulation step");
    }

    /// Reflects the boid at `index` off the arena boundary.
    pub fn bounce(&mut self, index: usize) {
        let arena = self.arena;
        if let Some(boid) = self.boids.get_mut(index) {
            arena.bounce(boid);
        }
    }

    /// Index of the first boid whose disc contains `(x, y)`.
    pub fn find_boid(&self, x: f64, y: f64) -> Option<usize> {
        self.find_boid_within(x, y, 0.0)
    }

    /// Like `find_boid`, but each disc is at least `min_radius` wide. Lets the
    /// shell pick boids that are drawn larger than their body.
    pub fn find_boid_within(&self, x: f64, y: f64, min_radius: f64) -> Option<usize> {
        self.boids
            .iter()
            .position(|boid| (boid.x - x).hypot(boid.y - y) <= boid.size.max(min_radius))
    }

    /// Distance between two boids of the roster.
    pub fn distance_between(&self, a: usize, b: usize) -> Option<f64> {
        Some(distance(self.boids.get(a)?, self.boids.get(b)?))
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn width(&self) -> f64 {
        self.arena.width
    }

    pub fn height(&self) -> f64 {
        self.arena.height
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn background(&self) -> Rgb<u8> {
        self.background
    }

    pub fn bearing_unit(&self) -> BearingUnit {
        self.bearing_unit
    }

    pub fn set_bearing_unit(&mut self, unit: BearingUnit) {
        self.bearing_unit = unit;
    }

    pub fn speed_matching(&self) -> bool {
        self.speed_matching
    }

    pub fn set_speed_matching(&mut self, enabled: bool) {
        self.speed_matching = enabled;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_tick_collisions(&self) -> usize {
        self.last_tick_collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn empty_simulation_steps_without_effect() {
        let mut sim = Simulation::new(800.0, 600.0);
        sim.step();
        assert!(sim.is_empty());
        assert_eq!(sim.ticks(), 1);
        assert_eq!(sim.last_tick_collisions(), 0);
        assert_eq!((sim.width(), sim.height()), (800.0, 600.0));
    }

    #[test]
    fn add_boid_appends_in_order() {
        let mut sim = Simulation::new(100.0, 100.0);
        sim.add_boid(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        sim.add_boid(7.0, 8.0, 9.0, 10.0, 11.0, 12.0).size = 4.0;

        assert_eq!(sim.len(), 2);
        assert_eq!(sim.boids()[0].x, 1.0);
        assert_eq!(sim.boids()[1].x, 7.0);
        assert_eq!(sim.boids()[1].size, 4.0);
    }

    #[test]
    fn single_boid_tick_follows_behaviour_order() {
        let mut sim = Simulation::new(800.0, 800.0);
        sim.add_boid(400.0, 400.0, 2.0, FRAC_PI_2, 100.0, 10.0);
        sim.step();

        // Moves to (402, 400), re-aims at itself (angle pi/2, speed 0),
        // then realign doubles the heading to pi.
        let boid = &sim.boids()[0];
        assert_relative_eq!(boid.x, 402.0, epsilon = 1e-9);
        assert_relative_eq!(boid.y, 400.0, epsilon = 1e-9);
        assert_eq!(boid.speed, 0.0);
        assert_relative_eq!(boid.angle, 2.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn step_bounces_boids_off_the_wall() {
        let mut sim = Simulation::new(100.0, 100.0);
        sim.add_boid(98.0, 50.0, 5.0, FRAC_PI_2, 0.0, 0.0);
        sim.step();

        let boid = &sim.boids()[0];
        assert_relative_eq!(boid.x, 95.0, epsilon = 1e-9);
        assert!(boid.x <= sim.width() - boid.size);
    }

    #[test]
    fn overlapping_pair_collides_once_per_tick() {
        let mut sim = Simulation::new(800.0, 800.0);
        sim.add_boid(400.0, 400.0, 0.0, 0.0, 0.0, 0.0).size = 5.0;
        sim.add_boid(405.0, 400.0, 0.0, 0.0, 0.0, 0.0).size = 5.0;
        sim.step();
        assert_eq!(sim.last_tick_collisions(), 1);
    }

    #[test]
    fn find_boid_hits_inside_disc() {
        let mut sim = Simulation::new(100.0, 100.0);
        sim.add_boid(10.0, 10.0, 0.0, 0.0, 0.0, 0.0).size = 3.0;
        sim.add_boid(50.0, 50.0, 0.0, 0.0, 0.0, 0.0);

        assert_eq!(sim.find_boid(12.0, 10.0), Some(0));
        assert_eq!(sim.find_boid(50.5, 50.0), Some(1));
        assert_eq!(sim.find_boid(30.0, 30.0), None);
    }

    #[test]
    fn pick_radius_widens_small_boids_only() {
        let mut sim = Simulation::new(100.0, 100.0);
        sim.add_boid(10.0, 10.0, 0.0, 0.0, 0.0, 0.0);
        sim.add_boid(50.0, 50.0, 0.0, 0.0, 0.0, 0.0).size = 6.0;

        assert_eq!(sim.find_boid(12.0, 10.0), None);
        assert_eq!(sim.find_boid_within(12.0, 10.0, 2.5), Some(0));
        assert_eq!(sim.find_boid_within(13.0, 10.0, 2.5), None);
        // Larger bodies keep their own radius
        assert_eq!(sim.find_boid_within(55.5, 50.0, 2.5), Some(1));
    }

    #[test]
    fn bounce_by_index_ignores_missing_boid() {
        let mut sim = Simulation::new(100.0, 100.0);
        sim.add_boid(120.0, 50.0, 0.0, 1.0, 0.0, 0.0);
        sim.bounce(0);
        sim.bounce(7);
        assert_eq!(sim.boids()[0].x, 78.0);
        assert_eq!(sim.boids()[0].angle, -1.0);
    }

    #[test]
    fn from_params_applies_configuration() {
        let mut params = SimulationParams::default();
        params.bearing_unit = BearingUnit::Radians;
        params.enable_speed_matching = true;

        let sim = Simulation::from_params(&params).unwrap();
        assert_eq!(sim.bearing_unit(), BearingUnit::Radians);
        assert!(sim.speed_matching());
        assert_eq!(sim.width(), params.arena_width);
        assert!(sim.is_empty());
    }

    #[test]
    fn from_params_rejects_invalid_arena() {
        let mut params = SimulationParams::default();
        params.arena_width = 0.0;
        assert!(matches!(
            Simulation::from_params(&params),
            Err(ConfigError::InvalidArena { .. })
        ));
    }
}
