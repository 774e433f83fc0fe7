use thiserror::Error;

/// Reasons a set of simulation parameters cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena must have positive finite dimensions, got {width}x{height}")]
    InvalidArena { width: f64, height: f64 },

    #[error("boid mass must be positive, got {0}")]
    NonPositiveMass(f64),

    #[error("boid size must be positive, got {0}")]
    NonPositiveSize(f64),

    #[error("{name} radius must not be negative, got {value}")]
    NegativeRadius { name: &'static str, value: f64 },

    #[error("spawn extent {extent} does not fit in a {width}x{height} arena")]
    SpawnOutsideArena { extent: f64, width: f64, height: f64 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
