/*
 * Geometry Module
 *
 * Pure helpers over polar vectors and pairs of boids.
 *
 * A polar vector is an (angle, magnitude) pair. Angles are radians measured
 * clockwise from "up", so a vector with angle 0 points towards -y on screen.
 * That matches how boids integrate their position:
 *   dx =  sin(angle) * speed
 *   dy = -cos(angle) * speed
 */

use std::f64::consts::FRAC_PI_2;

use crate::boid::Boid;

/// A transient (angle, magnitude) pair used to combine headings and speeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarVector {
    pub angle: f64,
    pub magnitude: f64,
}

impl PolarVector {
    pub const fn new(angle: f64, magnitude: f64) -> Self {
        Self { angle, magnitude }
    }

    // Cartesian components in the sin/cos convention used by add_vectors
    pub fn components(self) -> (f64, f64) {
        (self.angle.sin() * self.magnitude, self.angle.cos() * self.magnitude)
    }
}

impl From<(f64, f64)> for PolarVector {
    fn from((angle, magnitude): (f64, f64)) -> Self {
        Self { angle, magnitude }
    }
}

/// How the angle produced by [`bearing_vector`] is expressed.
///
/// `Degrees` is the legacy behaviour: the bearing is converted to degrees and
/// then consumed by the rest of the system as if it were radians. It is the
/// default because the flock dynamics depend on it. `Radians` keeps the
/// bearing in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BearingUnit {
    #[default]
    Degrees,
    Radians,
}

impl BearingUnit {
    pub fn convert(self, radians: f64) -> f64 {
        match self {
            BearingUnit::Degrees => radians.to_degrees(),
            BearingUnit::Radians => radians,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BearingUnit::Degrees => "Degrees (legacy)",
            BearingUnit::Radians => "Radians",
        }
    }
}

/// Adds two polar vectors by going through Cartesian space and back.
pub fn add_vectors(v1: PolarVector, v2: PolarVector) -> PolarVector {
    let (x1, y1) = v1.components();
    let (x2, y2) = v2.components();
    let x = x1 + x2;
    let y = y1 + y2;

    PolarVector {
        angle: FRAC_PI_2 - y.atan2(x),
        magnitude: x.hypot(y),
    }
}

/// Euclidean distance between two boids.
pub fn distance(a: &Boid, b: &Boid) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Unit vector whose angle is the bearing of `from` relative to `to`.
pub fn bearing_vector(from: &Boid, to: &Boid, unit: BearingUnit) -> PolarVector {
    let dx = from.x - to.x;
    let dy = from.y - to.y;
    PolarVector::new(unit.convert(dx.atan2(dy)), 1.0)
}

/// Same as [`bearing_vector`] with the angle negated.
pub fn opposite_bearing_vector(from: &Boid, to: &Boid, unit: BearingUnit) -> PolarVector {
    let bearing = bearing_vector(from, to, unit);
    PolarVector::new(-bearing.angle, bearing.magnitude)
}
