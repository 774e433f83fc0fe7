/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for a flock run. The defaults reproduce the classic
 * 800x800 arena with 30 boids. Parameters can be modified through the UI;
 * change detection compares against a snapshot taken at the start of each
 * UI frame.
 */

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::BearingUnit;

// Parameters for the simulation that can be adjusted via UI
#[derive(Debug, Clone)]
pub struct SimulationParams {
    pub arena_width: f64,
    pub arena_height: f64,
    pub num_boids: usize,
    pub spawn_extent: f64,
    pub initial_speed: f64,
    pub max_initial_angle: u32,
    pub awareness: f64,
    pub separation: f64,
    pub boid_mass: f64,
    pub boid_size: f64,
    pub bearing_unit: BearingUnit,
    pub enable_speed_matching: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
struct ParamSnapshot {
    num_boids: usize,
    spawn_extent: f64,
    initial_speed: f64,
    max_initial_angle: u32,
    awareness: f64,
    separation: f64,
    boid_mass: f64,
    boid_size: f64,
    bearing_unit: BearingUnit,
    enable_speed_matching: bool,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 800.0,
            num_boids: 30,
            spawn_extent: 600.0,
            initial_speed: 10.0,
            // Spawn headings are whole numbers in 0..=360, used as radians
            max_initial_angle: 360,
            awareness: 600.0,
            separation: 200.0,
            boid_mass: 1.0,
            boid_size: 1.0,
            bearing_unit: BearingUnit::Degrees,
            enable_speed_matching: false,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    /// Checks the parameters a simulation cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        let arena_ok = |v: f64| v.is_finite() && v > 0.0;
        if !arena_ok(self.arena_width) || !arena_ok(self.arena_height) {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        // Written as negations so NaN is rejected too
        if !(self.boid_mass > 0.0) {
            return Err(ConfigError::NonPositiveMass(self.boid_mass));
        }
        if !(self.boid_size > 0.0) {
            return Err(ConfigError::NonPositiveSize(self.boid_size));
        }

        for (name, value) in [("awareness", self.awareness), ("separation", self.separation)] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeRadius { name, value });
            }
        }

        if !(self.spawn_extent >= 0.0
            && self.spawn_extent <= self.arena_width
            && self.spawn_extent <= self.arena_height)
        {
            return Err(ConfigError::SpawnOutsideArena {
                extent: self.spawn_extent,
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            num_boids: self.num_boids,
            spawn_extent: self.spawn_extent,
            initial_speed: self.initial_speed,
            max_initial_angle: self.max_initial_angle,
            awareness: self.awareness,
            separation: self.separation,
            boid_mass: self.boid_mass,
            boid_size: self.boid_size,
            bearing_unit: self.bearing_unit,
            enable_speed_matching: self.enable_speed_matching,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (should_reset_boids, num_boids_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool, bool) {
        let Some(prev) = &self.previous_values else {
            return (false, false, false);
        };

        let current = self.snapshot();
        let num_boids_changed = current.num_boids != prev.num_boids;

        // Anything that shapes a freshly spawned flock needs a respawn
        let spawn_changed = current.spawn_extent != prev.spawn_extent
            || current.initial_speed != prev.initial_speed
            || current.max_initial_angle != prev.max_initial_angle
            || current.awareness != prev.awareness
            || current.separation != prev.separation
            || current.boid_mass != prev.boid_mass
            || current.boid_size != prev.boid_size;

        let ui_changed = current != *prev;

        // The first element (should_reset_boids) is also set by the UI reset button
        (spawn_changed, num_boids_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        0..=500
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f64> {
        0.0..=50.0
    }

    pub fn get_angle_range() -> std::ops::RangeInclusive<u32> {
        0..=720
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f64> {
        0.0..=1000.0
    }

    pub fn get_mass_range() -> std::ops::RangeInclusive<f64> {
        0.1..=10.0
    }

    pub fn get_size_range() -> std::ops::RangeInclusive<f64> {
        0.5..=20.0
    }

    pub fn get_spawn_extent_range(&self) -> std::ops::RangeInclusive<f64> {
        0.0..=self.arena_width.min(self.arena_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = SimulationParams::default();
        assert_eq!(params.validate(), Ok(()));
        assert_eq!((params.arena_width, params.arena_height), (800.0, 800.0));
        assert_eq!(params.num_boids, 30);
        assert_eq!((params.awareness, params.separation), (600.0, 200.0));
    }

    #[test]
    fn rejects_unusable_values() {
        let mut params = SimulationParams::default();
        params.arena_height = f64::NAN;
        assert!(matches!(params.validate(), Err(ConfigError::InvalidArena { .. })));

        let mut params = SimulationParams::default();
        params.boid_mass = 0.0;
        assert_eq!(params.validate(), Err(ConfigError::NonPositiveMass(0.0)));

        let mut params = SimulationParams::default();
        params.boid_size = -1.0;
        assert_eq!(params.validate(), Err(ConfigError::NonPositiveSize(-1.0)));

        let mut params = SimulationParams::default();
        params.separation = -5.0;
        assert_eq!(
            params.validate(),
            Err(ConfigError::NegativeRadius { name: "separation", value: -5.0 })
        );

        let mut params = SimulationParams::default();
        params.spawn_extent = 900.0;
        assert!(matches!(params.validate(), Err(ConfigError::SpawnOutsideArena { .. })));
    }

    #[test]
    fn no_snapshot_means_no_changes() {
        let mut params = SimulationParams::default();
        params.num_boids = 99;
        assert_eq!(params.detect_changes(), (false, false, false));
    }

    #[test]
    fn detects_population_change() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.num_boids += 1;
        assert_eq!(params.detect_changes(), (false, true, true));
    }

    #[test]
    fn spawn_parameters_request_reset() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.awareness = 300.0;
        assert_eq!(params.detect_changes(), (true, false, true));
    }

    #[test]
    fn toggles_only_mark_ui_changed() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.show_debug = true;
        params.bearing_unit = BearingUnit::Radians;
        assert_eq!(params.detect_changes(), (false, false, true));
    }
}
